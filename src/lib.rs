//! Four week wall calendar for black/white/red e-paper panels
//!
//! Events go in through [`feed`], are laid out and drawn by
//! [`calendar::Calendar`] onto a [`framebuffer::Framebuffer`], and the
//! finished frame leaves through a [`sink::FrameSink`].

#![warn(missing_docs)]

pub mod calendar;
pub mod feed;
pub mod framebuffer;
pub mod sink;
pub mod text;
