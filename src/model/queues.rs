// src/model/queues.rs

use crate::error::QueueError;
use crate::model::plane::Plane;
use std::collections::VecDeque;

/// FIFO holding area for planes waiting on the runway.
///
/// The capacity is enforced on every `enqueue`, not by the size of the
/// backing buffer.
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    buffer: VecDeque<Plane>,
    capacity: usize,
}

impl BoundedQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a plane at the back of the queue.
    /// Leaves the queue untouched if it is already full.
    pub fn enqueue(&mut self, plane: Plane) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }
        self.buffer.push_back(plane);
        Ok(())
    }

    /// Remove the plane that has been waiting longest.
    pub fn dequeue(&mut self) -> Result<Plane, QueueError> {
        self.buffer.pop_front().ok_or(QueueError::Empty)
    }

    /// The plane `dequeue` would return next.
    pub fn peek(&self) -> Option<&Plane> {
        self.buffer.front()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
