//! # RRR Compressed Bitmaps
//!
//! *Entropy-bounded space with constant-time rank and select.*
//!
//! ## Intuition First
//!
//! Picture a long shelf of light switches, most of them off. Writing down
//! the full on/off state of every switch wastes paper when the pattern is
//! predictable. Instead, group the switches into small panels and note, for
//! each panel, only "how many are on" and "which arrangement of that many".
//! Panels that are all-off or all-on take almost no ink, yet any single
//! switch can still be looked up without re-reading the shelf.
//!
//! That is the RRR scheme: the "how many" is a block's *class*, the "which
//! arrangement" is its *offset* into the class's lexicographic enumeration,
//! and a sparse ledger of running totals (*markers*) keeps every lookup a
//! short hop instead of a scan.
//!
//! ## The Problem
//!
//! A plain bit array answers `access` in $O(1)$ but spends a full bit per
//! position regardless of content. General-purpose compression reaches the
//! entropy limit but forfeits random access. Rank and select — counting
//! 1-bits before a position, finding the $k$-th 1-bit — are the primitives
//! everything from text indexes to character class tables is built on, and
//! they need both properties at once.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Jacobson     Rank/select and the succinct paradigm
//! 2002  Raman-Raman-Rao  H0-compressed bitmaps from block enumeration
//! 2007  Ferragina    FM-indexes push rank/select into text search
//! 2008  Claude-Navarro   Practical RRR: "Fast, Small, Simple" engineering
//! ```
//!
//! Raman, Raman and Rao observed that a block of $u$ bits with $r$ ones is
//! fully identified by $(r, \textrm{index within } \binom{u}{r})$, and that
//! the index costs only $\lceil \lg \binom{u}{r} \rceil$ bits — which is
//! tiny exactly when the block is predictable.
//!
//! ## Mathematical Formulation
//!
//! For a bit string $B$ of length $n$ with $n_1$ ones and $n_0$ zeros, the
//! zeroth-order entropy is
//! $H_0 = \frac{n_0}{n}\lg\frac{n}{n_0} + \frac{n_1}{n}\lg\frac{n}{n_1}$.
//! The encoding stores $n H_0 + o(n)$ bits and answers:
//!
//! - `get(i)`: the bit at position $i$.
//! - `rank1(i)`: the number of 1-bits in $[0, i)$.
//! - `select1(k)`: the position of the $k$-th 1-bit (0-indexed).
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(s/u)$ per query with block size $u$ and marker spacing
//!   $s$ — constant for fixed parameters. `select1` adds an
//!   $O(\lg(n/s))$ binary search over markers.
//! - **Space**: $n H_0$ for classes and offsets, plus $O((n/s)\lg n)$
//!   marker bits.
//!
//! ## What Could Go Wrong
//!
//! 1. **Dense inputs**: past 50% density (maximum entropy) the encoding is
//!    larger than the raw bits. RRR pays off on skewed inputs.
//! 2. **Block size choice**: class fields cost $\lceil\lg(u+1)\rceil$ bits
//!    whether or not they are fully used; sizes of the form $2^k - 1$
//!    waste none of that field and compress measurably better.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`RrrVector`**: the compressed bitmap with rank/select support.
//! - **`BitVector`**: packed variable-width storage underpinning it, also
//!   used to assemble inputs.
//! - **`codec`**: the Pascal's-triangle block ranking shared by both.
//!
//! ## References
//!
//! - Raman, R., Raman, V., & Rao, S. S. (2002). "Succinct indexable
//!   dictionaries with applications to encoding k-ary trees and multisets."
//! - Claude, F., & Navarro, G. (2008). "Practical Rank/Select Queries over
//!   Arbitrary Sequences."
//! - Navarro, G., & Providel, E. (2012). "Fast, Small, Simple Rank/Select
//!   on Bitmaps."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod codec;
pub mod error;
pub mod rrr;

pub use bitvec::BitVector;
pub use error::Error;
pub use rrr::RrrVector;
