//! Sound: a looping ambience bed plus a one-shot sting when a decor element
//! is fully revealed. Plain `<audio>` elements are enough here.

use web_sys as web;

use crate::constants::{AMBIENCE_SRC, AMBIENCE_VOLUME, REVEAL_SRC, REVEAL_VOLUME};

pub struct AudioBank {
    ambience: Option<web::HtmlAudioElement>,
}

impl AudioBank {
    pub fn new() -> Self {
        let ambience = match web::HtmlAudioElement::new_with_src(AMBIENCE_SRC) {
            Ok(el) => {
                el.set_loop(true);
                el.set_volume(AMBIENCE_VOLUME);
                Some(el)
            }
            Err(e) => {
                log::warn!("ambience audio unavailable: {:?}", e);
                None
            }
        };
        Self { ambience }
    }

    /// Start the ambience loop. Must be called from a user gesture or the
    /// browser refuses playback.
    pub fn start_ambience(&self) {
        if let Some(a) = &self.ambience {
            _ = a.play();
        }
    }

    pub fn play_reveal(&self) {
        // Fresh element per shot so overlapping reveals each play fully.
        if let Ok(el) = web::HtmlAudioElement::new_with_src(REVEAL_SRC) {
            el.set_volume(REVEAL_VOLUME);
            _ = el.play();
        }
    }
}
