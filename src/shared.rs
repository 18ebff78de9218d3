//! Sharing one panel between several drawing tasks
//!
//! [`Display`] already requires `&mut self` for every operation. When the
//! panel has to be reachable from more than one place, for example from a
//! `static` touched by several tasks, wrap it in a [`SharedDisplay`].
//!
//! ```
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use ili9341::{Color565, DisplayInterface, SharedDisplay};
//!
//! fn draw_status<I: DisplayInterface>(
//!     shared: &SharedDisplay<CriticalSectionRawMutex, I>,
//! ) -> Result<(), ili9341::Error<I>> {
//!     shared.lock(|display| display.fill_rect(0, 239, 0, 15, Color565::DARK_BLUE))
//! }
//! ```

use core::cell::RefCell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// A [`Display`] behind a blocking mutex
///
/// `R` picks the locking strategy: `CriticalSectionRawMutex` to share across
/// interrupt priorities or cores, `NoopRawMutex` within a single executor.
pub struct SharedDisplay<R, I>
where
    R: RawMutex,
    I: DisplayInterface,
{
    inner: Mutex<R, RefCell<Display<I>>>,
}

impl<R, I> SharedDisplay<R, I>
where
    R: RawMutex,
    I: DisplayInterface,
{
    /// Wrap an initialized display
    pub fn new(display: Display<I>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display
    ///
    /// # Errors
    ///
    /// Returns `Error::Busy` when called from inside another `lock` on the
    /// same display, otherwise whatever `f` returns.
    pub fn lock<T, F>(&self, f: F) -> Result<T, Error<I>>
    where
        F: FnOnce(&mut Display<I>) -> Result<T, Error<I>>,
    {
        self.inner.lock(|cell| {
            let Ok(mut display) = cell.try_borrow_mut() else {
                log::warn!("ili9341: display locked re-entrantly");
                return Err(Error::Busy);
            };
            f(&mut display)
        })
    }

    /// Access the display without locking
    pub fn get_mut(&mut self) -> &mut Display<I> {
        self.inner.get_mut().get_mut()
    }

    /// Unwrap the display
    pub fn into_inner(self) -> Display<I> {
        self.inner.into_inner().into_inner()
    }
}
