use std::collections::VecDeque;

use crate::basic_types::ArcId;

/// The worklist of arcs which still have to be revised.
///
/// Arcs are processed in FIFO order. The queue does not deduplicate: an arc which is enqueued
/// while it is already pending will be revised once for every time it was enqueued.
#[derive(Debug, Clone, Default)]
pub(crate) struct ArcQueue {
    queue: VecDeque<ArcId>,
    num_enqueued: u64,
}

impl ArcQueue {
    pub(crate) fn new(initial_arcs: impl IntoIterator<Item = ArcId>) -> ArcQueue {
        let mut queue = ArcQueue::default();
        queue.enqueue_all(initial_arcs);
        queue
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn enqueue_all(&mut self, arcs: impl IntoIterator<Item = ArcId>) {
        for arc in arcs {
            self.queue.push_back(arc);
            self.num_enqueued += 1;
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ArcId> {
        self.queue.pop_front()
    }

    /// The number of arcs which have been enqueued over the lifetime of this queue, including the
    /// initial ones.
    pub(crate) fn num_enqueued(&self) -> u64 {
        self.num_enqueued
    }
}
