// src/ui/mod.rs

pub mod form;

pub use form::{
    BounceForm, FORM_TITLE, FormStatus, REOPEN_KEY, draw_bounce_form, open_bounce_form,
    record_outcomes, reopen_on_hotkey,
};
