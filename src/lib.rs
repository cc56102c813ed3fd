//! Gallery core for astronomy picture-of-the-day records.
//!
//! Pipeline: a [`source::RecordSource`] fetches day records, [`select`] cuts
//! the window of the 9 most recent entries at or before a reference date,
//! [`card`] maps each record into a display-ready descriptor, and a
//! [`view::GalleryView`] implementation renders the result. State lives in
//! [`state::AppState`] and is replaced wholesale on each successful fetch.

pub mod app;
pub mod card;
pub mod facts;
pub mod logging;
pub mod record;
pub mod select;
pub mod source;
pub mod state;
pub mod view;
