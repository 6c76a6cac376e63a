/*!
# Utilities

Helper data structures used by the algorithms.
*/

pub mod priority_queue;

pub use priority_queue::IndexedMinHeap;
