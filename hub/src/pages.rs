//! Pages, navigation, and page content
//!
//! The hub is a handful of static pages behind a navbar. Page identity also
//! selects ancillary behaviors: the calculator page clears stale results on
//! edit, the quantum page adds a hover glow to its topic cards.

/// Scroll offset past which the navbar switches to its solid style
pub const NAVBAR_SOLID_SCROLL: f32 = 100.0;

/// Hero parallax factor applied to the page scroll offset
pub const PARALLAX_FACTOR: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Mechanics,
    Quantum,
    Relativity,
    Calculator,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Mechanics,
        Page::Quantum,
        Page::Relativity,
        Page::Calculator,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Mechanics => "Mechanics",
            Page::Quantum => "Quantum",
            Page::Relativity => "Relativity",
            Page::Calculator => "Calculator",
        }
    }

    /// Digit-key navigation: 1 through 5
    pub fn from_digit(digit: u8) -> Option<Page> {
        match digit {
            1 => Some(Page::Home),
            2 => Some(Page::Mechanics),
            3 => Some(Page::Quantum),
            4 => Some(Page::Relativity),
            5 => Some(Page::Calculator),
            _ => None,
        }
    }

    /// Calculator page rule: a result goes stale the moment an input changes.
    pub fn clears_result_on_edit(&self) -> bool {
        matches!(self, Page::Calculator)
    }

    /// Quantum page rule: topic cards glow on hover.
    pub fn hover_glow(&self) -> bool {
        matches!(self, Page::Quantum)
    }

    /// Whether the animated atom scene is drawn behind this page.
    pub fn shows_atom_scene(&self) -> bool {
        matches!(self, Page::Home)
    }
}

/// The collapsible nav menu behind the hamburger toggle.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a nav link always collapses the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Glyph for the toggle button: bars closed, cross open.
    pub fn icon(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}

/// One card in the physicist carousel
pub struct Physicist {
    pub name: &'static str,
    pub years: &'static str,
    pub field: &'static str,
    pub legacy: &'static str,
}

/// Carousel card registry, fixed at startup
pub const PHYSICISTS: [Physicist; 5] = [
    Physicist {
        name: "Isaac Newton",
        years: "1643 – 1727",
        field: "Classical mechanics",
        legacy: "Laws of motion and universal gravitation; calculus.",
    },
    Physicist {
        name: "Albert Einstein",
        years: "1879 – 1955",
        field: "Relativity",
        legacy: "Special and general relativity; the photoelectric effect.",
    },
    Physicist {
        name: "Marie Curie",
        years: "1867 – 1934",
        field: "Radioactivity",
        legacy: "Discovered polonium and radium; two Nobel Prizes.",
    },
    Physicist {
        name: "Niels Bohr",
        years: "1885 – 1962",
        field: "Atomic structure",
        legacy: "The Bohr model of the atom; quantum complementarity.",
    },
    Physicist {
        name: "Richard Feynman",
        years: "1918 – 1988",
        field: "Quantum electrodynamics",
        legacy: "Path integrals and Feynman diagrams.",
    },
];

/// One revealable content block on a page
pub struct TopicCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A page's revealable content: a lead block followed by topic cards.
pub struct PageContent {
    pub heading: &'static str,
    pub lead: &'static str,
    pub topics: &'static [TopicCard],
}

impl PageContent {
    /// Number of blocks the scroll-reveal controller tracks for this page:
    /// the lead plus every topic card.
    pub fn block_count(&self) -> usize {
        1 + self.topics.len()
    }
}

pub fn content(page: Page) -> &'static PageContent {
    match page {
        Page::Home => &HOME,
        Page::Mechanics => &MECHANICS,
        Page::Quantum => &QUANTUM,
        Page::Relativity => &RELATIVITY,
        Page::Calculator => &CALCULATOR,
    }
}

static HOME: PageContent = PageContent {
    heading: "Explore the Laws of Nature",
    lead: "From falling apples to entangled particles, physics describes the \
           universe at every scale. Pick a topic below or try the force \
           calculator.",
    topics: &[
        TopicCard {
            icon: "🍎",
            title: "Mechanics",
            blurb: "Motion, forces, energy, and momentum.",
        },
        TopicCard {
            icon: "⚛",
            title: "Quantum",
            blurb: "The strange rules of the very small.",
        },
        TopicCard {
            icon: "🌌",
            title: "Relativity",
            blurb: "Space, time, and gravity rewritten.",
        },
    ],
};

static MECHANICS: PageContent = PageContent {
    heading: "Classical Mechanics",
    lead: "Newton's three laws govern everything from billiard balls to \
           planetary orbits.",
    topics: &[
        TopicCard {
            icon: "📐",
            title: "Kinematics",
            blurb: "Describing motion: position, velocity, acceleration.",
        },
        TopicCard {
            icon: "🔨",
            title: "Dynamics",
            blurb: "F = ma: how forces change motion.",
        },
        TopicCard {
            icon: "⚖",
            title: "Conservation Laws",
            blurb: "Energy and momentum are never lost, only moved.",
        },
        TopicCard {
            icon: "🌀",
            title: "Rotation",
            blurb: "Torque, angular momentum, and spinning bodies.",
        },
    ],
};

static QUANTUM: PageContent = PageContent {
    heading: "Quantum Physics",
    lead: "Below the atomic scale, certainty gives way to probability \
           amplitudes and wavefunctions.",
    topics: &[
        TopicCard {
            icon: "🌊",
            title: "Wave-Particle Duality",
            blurb: "Light and matter behave as both wave and particle.",
        },
        TopicCard {
            icon: "❓",
            title: "Uncertainty",
            blurb: "Position and momentum cannot both be pinned down.",
        },
        TopicCard {
            icon: "🔗",
            title: "Entanglement",
            blurb: "Correlations that no classical story can explain.",
        },
        TopicCard {
            icon: "⚡",
            title: "Tunneling",
            blurb: "Particles cross barriers they classically cannot.",
        },
    ],
};

static RELATIVITY: PageContent = PageContent {
    heading: "Relativity",
    lead: "Measurements of space and time depend on the observer; gravity is \
           the curvature of spacetime itself.",
    topics: &[
        TopicCard {
            icon: "🚀",
            title: "Time Dilation",
            blurb: "Moving clocks run slow.",
        },
        TopicCard {
            icon: "📏",
            title: "Length Contraction",
            blurb: "Moving rulers shrink along their motion.",
        },
        TopicCard {
            icon: "🕳",
            title: "Black Holes",
            blurb: "Where curvature runs away and light cannot escape.",
        },
    ],
};

static CALCULATOR: PageContent = PageContent {
    heading: "Physics Calculators",
    lead: "Quick numeric tools. Results update when you press Calculate or \
           hit Enter in a field.",
    topics: &[TopicCard {
        icon: "🧮",
        title: "Force (F = ma)",
        blurb: "Newton's second law: force from mass and acceleration.",
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_navigation_covers_all_pages() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(Page::from_digit(i as u8 + 1), Some(*page));
        }
        assert_eq!(Page::from_digit(0), None);
        assert_eq!(Page::from_digit(6), None);
    }

    #[test]
    fn page_rules_are_page_specific() {
        assert!(Page::Calculator.clears_result_on_edit());
        assert!(Page::Quantum.hover_glow());
        assert!(Page::Home.shows_atom_scene());
        for page in Page::ALL {
            if page != Page::Calculator {
                assert!(!page.clears_result_on_edit());
            }
            if page != Page::Quantum {
                assert!(!page.hover_glow());
            }
            if page != Page::Home {
                assert!(!page.shows_atom_scene());
            }
        }
    }

    #[test]
    fn nav_menu_toggles_and_closes() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), "☰");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), "✕");

        menu.close();
        assert!(!menu.is_open());
        // Closing an already closed menu stays closed.
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn every_page_has_revealable_content() {
        for page in Page::ALL {
            let content = content(page);
            assert!(!content.heading.is_empty());
            assert!(content.block_count() >= 2);
            assert_eq!(content.block_count(), 1 + content.topics.len());
        }
    }

    #[test]
    fn carousel_registry_is_nonempty() {
        assert!(!PHYSICISTS.is_empty());
        for p in &PHYSICISTS {
            assert!(!p.name.is_empty());
            assert!(!p.legacy.is_empty());
        }
    }
}
