//! Fixed-capacity windowing primitives for streaming indicators.
//!
//! Every streaming indicator reduces to a recurrence over a bounded window
//! of recent observations; this crate provides the window. Storage is
//! preallocated ring memory ([`RingStore`]) that never moves elements, with
//! two eviction policies layered on top: [`CircularBuffer`] silently
//! overwrites the opposite end when full, [`CircularDeque`] refuses with an
//! error. The monotone queues ([`MaxQueue`], [`MinQueue`], [`MinMaxQueue`])
//! build on the deque to answer window max/min in O(1) amortized time.
//!
//! Nothing here allocates after construction or blocks; each structure
//! belongs to a single stream consumer.
//!
//! ```
//! use quantring::{MinMaxQueue, Result};
//!
//! fn main() -> Result<()> {
//!     let width = 3i64;
//!     let mut channel = MinMaxQueue::new(width as usize)?;
//!     for (i, (high, low)) in [(10.2, 9.7), (10.8, 10.1), (10.5, 9.9)].iter().enumerate() {
//!         let index = (i + 1) as i64;
//!         channel.evict_before(index - width);
//!         channel.update(*high, *low, index)?;
//!     }
//!     assert_eq!(channel.max()?, 10.8);
//!     assert_eq!(channel.min()?, 9.7);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod ring;

pub mod buffer;
pub mod deque;
pub mod monotone;

pub mod convert;

pub use buffer::CircularBuffer;
pub use deque::CircularDeque;
pub use error::{Error, Result};
pub use monotone::{Max, MaxQueue, Min, MinMaxQueue, MinQueue, MonotoneQueue, Polarity, Sample};
pub use ring::RingStore;
