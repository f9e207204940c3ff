//! Docking capacity simulation.
//!
//! Each port has a fixed number of docking slots. Ships that a search
//! routes through a port are queued there in order, and a later arrival
//! has to wait for a slot once every slot is taken. The simulator belongs
//! to a single search and is reset before each one.

use std::collections::VecDeque;

use chrono::Duration;
use tracing::trace;

use crate::domain::{ClockTime, MINUTES_PER_DAY, Operator, PortId};

/// A ship occupying (or waiting for) a docking slot.
///
/// Dock and departure minutes count from midnight of the arrival day and
/// may exceed one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub operator: Operator,
    pub arrival: ClockTime,
    pub dock_mins: i64,
    pub departure_mins: i64,
}

/// First-come, first-served docking queue for one port.
#[derive(Debug, Clone)]
pub struct DockingQueue {
    slots: usize,
    entries: VecDeque<DockEntry>,
}

impl DockingQueue {
    /// Create an empty queue with `slots` docking slots.
    pub fn new(slots: usize) -> Self {
        Self {
            slots,
            entries: VecDeque::new(),
        }
    }

    /// Minute at which a ship arriving at `arrival` would get a slot.
    ///
    /// With a free slot this is the arrival itself. Otherwise it is the
    /// earliest departure among the ships holding the first `slots`
    /// positions, or the arrival if that is later.
    pub fn dock_time(&self, arrival: ClockTime) -> i64 {
        let arrival_mins = i64::from(arrival.minutes());
        if self.entries.len() < self.slots {
            return arrival_mins;
        }

        self.entries
            .iter()
            .take(self.slots)
            .map(|e| e.departure_mins)
            .min()
            .map_or(arrival_mins, |earliest| earliest.max(arrival_mins))
    }

    /// How long a ship arriving at `arrival` waits for a slot.
    pub fn wait(&self, arrival: ClockTime) -> Duration {
        let arrival_mins = i64::from(arrival.minutes());
        let dock = self.dock_time(arrival);
        let wait = if dock < arrival_mins {
            dock + i64::from(MINUTES_PER_DAY) - arrival_mins
        } else {
            dock - arrival_mins
        };
        Duration::minutes(wait)
    }

    /// Queue a ship that arrives at `arrival` and stays docked for `service`.
    pub fn enqueue(&mut self, operator: Operator, arrival: ClockTime, service: Duration) {
        let dock_mins = self.dock_time(arrival);
        let departure_mins = dock_mins + service.num_minutes();
        trace!(%operator, %arrival, dock_mins, departure_mins, "ship queued");
        self.entries.push_back(DockEntry {
            operator,
            arrival,
            dock_mins,
            departure_mins,
        });
    }

    /// Ships queued, in arrival order.
    pub fn entries(&self) -> impl Iterator<Item = &DockEntry> {
        self.entries.iter()
    }

    /// Remove every queued ship.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of queued ships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no ships are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of docking slots.
    pub fn slots(&self) -> usize {
        self.slots
    }
}

/// Docking queues for every port in a network.
#[derive(Debug, Clone)]
pub struct DockingSimulator {
    queues: Vec<DockingQueue>,
}

impl DockingSimulator {
    /// Create one empty queue per port.
    pub fn new(port_count: usize, slots: usize) -> Self {
        Self {
            queues: vec![DockingQueue::new(slots); port_count],
        }
    }

    /// Empty every queue.
    pub fn reset(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
    }

    /// Returns the queue for a port.
    pub fn queue(&self, port: PortId) -> Option<&DockingQueue> {
        self.queues.get(port.index())
    }

    /// Slot wait at `port` for a ship arriving at `arrival`.
    ///
    /// Unknown ports never make a ship wait.
    pub fn wait(&self, port: PortId, arrival: ClockTime) -> Duration {
        self.queue(port).map_or_else(Duration::zero, |queue| queue.wait(arrival))
    }

    /// Queue a ship at `port`. Unknown ports are ignored.
    pub fn enqueue(
        &mut self,
        port: PortId,
        operator: Operator,
        arrival: ClockTime,
        service: Duration,
    ) {
        if let Some(queue) = self.queues.get_mut(port.index()) {
            queue.enqueue(operator, arrival, service);
        }
    }

    /// Number of ships queued at each port, indexed by port id.
    pub fn queued_ships(&self) -> Vec<usize> {
        self.queues.iter().map(DockingQueue::len).collect()
    }

    /// Number of ports covered.
    pub fn port_count(&self) -> usize {
        self.queues.len()
    }
}
