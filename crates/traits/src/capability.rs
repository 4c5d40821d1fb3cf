/// Reports what the rendering environment can do natively.
pub trait CapabilityProbe {
    /// Hardware-accelerated transforms (`translate`, `scale`).
    fn transforms(&self) -> bool;

    /// Native style transitions with observable end events.
    fn transitions(&self) -> bool;
}

/// A probe with fixed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCapabilities {
    pub transforms: bool,
    pub transitions: bool,
}

impl StaticCapabilities {
    pub fn full() -> Self {
        Self {
            transforms: true,
            transitions: true,
        }
    }

    pub fn none() -> Self {
        Self {
            transforms: false,
            transitions: false,
        }
    }
}

impl Default for StaticCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

impl CapabilityProbe for StaticCapabilities {
    fn transforms(&self) -> bool {
        self.transforms
    }

    fn transitions(&self) -> bool {
        self.transitions
    }
}
