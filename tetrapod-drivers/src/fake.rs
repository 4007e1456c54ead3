//! Recording bus and delay for host tests
//!
//! Both fakes append to one shared [`Log`], so tests can check the exact
//! interleaving of register writes and pauses.

use core::cell::{Cell, RefCell};

use heapless::Vec;
use tetrapod_hal::{Delay, I2cBus};

const LOG_CAPACITY: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// (bus address, register, value)
    Write(u8, u8, u8),
    /// Pause in ms
    Pause(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Default)]
pub struct Log {
    events: RefCell<Vec<Event, LOG_CAPACITY>>,
    /// Total successful writes allowed before the bus faults
    write_limit: Cell<Option<usize>>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: Event) {
        self.events
            .borrow_mut()
            .push(event)
            .expect("event log full");
    }

    pub fn events(&self) -> Vec<Event, LOG_CAPACITY> {
        self.events.borrow().clone()
    }

    /// Let every following write succeed again
    pub fn heal(&self) {
        self.write_limit.set(None);
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn writes(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Write(..)))
            .count()
    }

    pub fn pauses(&self) -> Vec<u32, LOG_CAPACITY> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Pause(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    /// Last value written to a register, if any
    pub fn register(&self, register: u8) -> Option<u8> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Write(_, r, v) if *r == register => Some(*v),
            _ => None,
        })
    }
}

pub struct FakeBus<'a> {
    log: &'a Log,
}

impl<'a> FakeBus<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }

    /// Accept `n` more writes, then fail every write until [`Log::heal`]
    pub fn failing_after(log: &'a Log, n: usize) -> Self {
        log.write_limit.set(Some(log.writes() + n));
        Self { log }
    }
}

impl I2cBus for FakeBus<'_> {
    type Error = BusFault;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusFault> {
        if let Some(limit) = self.log.write_limit.get() {
            if self.log.writes() >= limit {
                return Err(BusFault);
            }
        }
        assert_eq!(data.len(), 2, "register writes are two bytes");
        self.log.record(Event::Write(address, data[0], data[1]));
        Ok(())
    }
}

pub struct FakeDelay<'a> {
    log: &'a Log,
}

impl<'a> FakeDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl Delay for FakeDelay<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.log.record(Event::Pause(ms));
    }
}
