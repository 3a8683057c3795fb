//! Navigation Collaborator
//!
//! The screen only knows how to ask for the next screen.

/// Advances the experience to the following screen
pub trait Navigator {
    fn go_to_next_screen(&self);
}

impl<F: Fn()> Navigator for F {
    fn go_to_next_screen(&self) {
        self()
    }
}
