//! Physics Hub
//!
//! An interactive tour of physics topics featuring:
//! - An animated atom scene with pulsing electron shells
//! - A Newton's-second-law force calculator with inline validation
//! - A carousel of famous physicists with timed auto-advance
//! - Scroll-revealed topic cards across five pages
//!
//! Controls:
//! - 1-5: Jump to a page (Home, Mechanics, Quantum, Relativity, Calculator)
//! - M: Toggle the nav menu (narrow windows)
//! - Esc: Close the nav menu

mod atom;
mod calculator;
mod carousel;
mod pages;
mod renderer;
mod reveal;
mod timer;
mod ui;

use atom::AtomScene;
use calculator::CalcState;
use carousel::Carousel;
use common::{Camera2D, WindowContext};
use pages::{NavMenu, Page, PHYSICISTS};
use renderer::SceneRenderer;
use reveal::Reveal;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

/// Upper bound on glowing dots (all electrons plus the nucleus)
const MAX_DOTS: usize = 64;

/// Half-height of the visible scene region in world units (pixels)
const SCENE_HALF_HEIGHT: f32 = 280.0;

/// Everything the widgets mutate: pages, controllers, and the scene clock.
pub struct HubState {
    pub page: Page,
    pub nav: NavMenu,
    pub scene: AtomScene,
    pub carousel: Option<Carousel>,
    pub carousel_hovered: bool,
    pub reveal: Reveal,
    pub calc: CalcState,
    pub scroll_y: f32,
}

impl HubState {
    fn new() -> Self {
        let mut state = Self {
            page: Page::Home,
            nav: NavMenu::default(),
            scene: AtomScene::new(),
            carousel: None,
            carousel_hovered: false,
            reveal: Reveal::default(),
            calc: CalcState::default(),
            scroll_y: 0.0,
        };
        state.navigate(Page::Home);
        state
    }

    /// Enter a page: close the menu, reset the reveal registry to the new
    /// page's blocks, and rebuild the carousel when landing on Home. This is
    /// the in-app equivalent of a page load.
    pub fn navigate(&mut self, page: Page) {
        log::info!("navigating to {}", page.title());

        self.nav.close();
        self.page = page;
        self.scroll_y = 0.0;
        self.reveal = Reveal::register(pages::content(page).block_count());
        self.carousel = if page == Page::Home {
            Carousel::new(PHYSICISTS.len())
        } else {
            None
        };
        self.carousel_hovered = false;
    }

    /// Advance the scene clock and the carousel auto-advance.
    fn update(&mut self, dt: f32) {
        self.scene.step(dt);

        if let Some(carousel) = &mut self.carousel {
            let steps = carousel.tick(dt);
            if steps > 0 {
                log::debug!("carousel auto-advanced to card {}", carousel.current());
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Digit1 => self.navigate(Page::Home),
            KeyCode::Digit2 => self.navigate(Page::Mechanics),
            KeyCode::Digit3 => self.navigate(Page::Quantum),
            KeyCode::Digit4 => self.navigate(Page::Relativity),
            KeyCode::Digit5 => self.navigate(Page::Calculator),
            KeyCode::KeyM => self.nav.toggle(),
            KeyCode::Escape => self.nav.close(),
            _ => {}
        }
    }
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: WindowContext,
    renderer: SceneRenderer,
    camera: Camera2D,
    state: HubState,
    egui: EguiState,
}

impl App {
    fn new(ctx: WindowContext) -> Self {
        let renderer = SceneRenderer::new(&ctx, MAX_DOTS);
        let mut camera = Camera2D::new(ctx.aspect_ratio());
        camera.zoom = SCENE_HALF_HEIGHT;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            camera,
            state: HubState::new(),
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let (num_dots, num_ring_vertices) =
            self.renderer.upload_scene(&self.ctx.queue, &self.state.scene);

        // Build the egui UI over the scene
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let egui_ctx = self.egui.ctx.clone();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            ui::draw(ctx, &mut self.state);
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(
            &mut encoder,
            &view,
            num_dots,
            num_ring_vertices,
            self.state.page.shows_atom_scene(),
        );

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    env_logger::init();
    log::info!("Physics Hub starting");

    let (ctx, event_loop) = pollster::block_on(WindowContext::new("Physics Hub", 1280, 800));

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(key),
                                        state,
                                        ..
                                    },
                                ..
                            } => app.state.handle_key(*key, *state),
                            WindowEvent::RedrawRequested => {
                                let now = std::time::Instant::now();
                                let dt = (now - last_time).as_secs_f32().min(0.1);
                                last_time = now;

                                app.state.update(dt);
                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => eprintln!("Render error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
