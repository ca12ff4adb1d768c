pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod order;
pub mod quick;

pub use self::bubble::bubble_sort;
pub use self::insertion::insertion_sort;
pub use self::merge::merge_sort;
pub use self::quick::quick_sort;
