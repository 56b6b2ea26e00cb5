use crate::eeg::EEG;
use common::host::Host;

pub struct Context<'a> {
    pub host: &'a mut dyn Host,
    pub eeg: &'a mut EEG,
}

impl<'a> Context<'a> {
    pub fn new(host: &'a mut dyn Host, eeg: &'a mut EEG) -> Self {
        Self { host, eeg }
    }

    /// Seconds of simulation time since the world started.
    pub fn time(&self) -> f32 {
        self.host.elapsed_seconds()
    }
}
