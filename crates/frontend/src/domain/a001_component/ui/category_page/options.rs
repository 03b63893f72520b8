//! Candidate labels of the multi-select filters.

pub const PROCESSOR_MODELS: &[&str] = &[
    "AMD Ryzen 3",
    "AMD Ryzen 5",
    "AMD Ryzen 7",
    "AMD Ryzen 9",
    "AMD Ryzen Threadripper",
    "AMD Ryzen Threadripper PRO",
    "Intel Celeron",
    "Intel Core i3",
    "Intel Core i5",
    "Intel Core i7",
    "Intel Core i9",
    "Intel Core Ultra 5",
    "Intel Core Ultra 7",
    "Intel Core Ultra 9",
    "Intel Pentium",
    "Intel Processor",
];

pub const PROCESSOR_SOCKETS: &[&str] = &[
    "AMD AM4",
    "AMD AM5",
    "AMD sTR5",
    "AMD sWRX8",
    "Intel 1200",
    "Intel 1700",
    "Intel 1851",
];

pub const PROCESSOR_PLATFORMS: &[&str] = &[
    "AMD Zen 2",
    "AMD Zen 3",
    "AMD Zen 4",
    "AMD Zen 5",
    "AMD Zen+",
    "Intel Alder Lake-S",
    "Intel Arrow-Lake-S",
    "Intel Comet Lake-S",
    "Intel Raptor Lake R",
    "Intel Raptor Lake-S",
    "Intel Raptor Lake-S R",
    "Intel Rocket Lake",
];

/// Spec names the sidebar filters read from a component
pub const SPEC_SOCKET: &str = "Socket";
pub const SPEC_PLATFORM: &str = "Plateforme";
pub const SPEC_FREQUENCY: &str = "Fréquence";

/// The three multi-select filter families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    Model,
    Socket,
    Platform,
}

impl FilterFamily {
    pub fn all() -> [FilterFamily; 3] {
        [FilterFamily::Model, FilterFamily::Socket, FilterFamily::Platform]
    }

    /// Sidebar caption
    pub fn label(&self) -> &'static str {
        match self {
            FilterFamily::Model => "MODÈLE DE PROCESSEUR",
            FilterFamily::Socket => "SUPPORT DU PROCESSEUR",
            FilterFamily::Platform => "PLATEFORME (PROC.)",
        }
    }

    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            FilterFamily::Model => PROCESSOR_MODELS,
            FilterFamily::Socket => PROCESSOR_SOCKETS,
            FilterFamily::Platform => PROCESSOR_PLATFORMS,
        }
    }
}
