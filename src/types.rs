pub type PaletteIndex = usize;

/// The shared style slot: written by the picker handler, read by the
/// renderer on every frame. Starts unset, which leaves the terminal's
/// default backdrop in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct StyleVar {
    value: Option<&'static str>,
}

impl StyleVar {
    pub fn set(&mut self, name: &'static str) {
        self.value = Some(name);
    }

    pub fn get(&self) -> Option<&'static str> {
        self.value
    }
}
