// Presentation: everything the person at the counter sees.

pub mod render;
