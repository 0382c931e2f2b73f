pub mod circular_queue;
pub mod dynamic_array;
pub mod sorted_set;

pub use circular_queue::CircularQueue;
pub use dynamic_array::DynamicArray;
pub use sorted_set::SortedSet;
