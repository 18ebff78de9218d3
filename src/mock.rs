//! Recording interface for unit tests

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::interface::{DisplayInterface, TransferWidth};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Command(u8),
    Data(Vec<u8>),
    Words(Vec<u16>),
    Width(TransferWidth),
    Reset,
    Backlight(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

/// Records every call. `fail_at` fails the n-th call (0-based) without
/// recording it; `fail_words` fails every word transfer.
#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub events: Vec<Event>,
    pub fail_at: Option<usize>,
    pub fail_words: bool,
    calls: usize,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    /// Number of calls seen so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Parameter bytes sent after each occurrence of `command`
    pub fn data_after(&self, command: u8) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut current = None;
        for event in &self.events {
            match event {
                Event::Command(c) => current = Some(*c),
                Event::Data(bytes) if current == Some(command) => out.push(bytes.clone()),
                _ => {}
            }
        }
        out
    }

    pub fn word_batches(&self) -> Vec<Vec<u16>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Words(words) => Some(words.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: Event) -> Result<(), MockError> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return Err(MockError);
        }
        self.events.push(event);
        Ok(())
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Event::Command(command))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Event::Data(data.to_vec()))
    }

    fn send_data_words(&mut self, data: &[u16]) -> Result<(), Self::Error> {
        if self.fail_words {
            self.calls += 1;
            return Err(MockError);
        }
        self.record(Event::Words(data.to_vec()))
    }

    fn set_transfer_width(&mut self, width: TransferWidth) -> Result<(), Self::Error> {
        self.record(Event::Width(width))
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.record(Event::Reset)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.record(Event::Backlight(on))
    }
}

/// Records requested sleeps in milliseconds
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub sleeps: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleeps.push(ms);
    }
}
