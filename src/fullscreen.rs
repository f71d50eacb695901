use std::{cell::RefCell, rc::Rc};

use log::debug;

use crate::platform::FullscreenPlatform;

/// Shown while the page is not fullscreen.
pub const ENTER_GLYPH: &str = "⛶";
/// Shown while the page is fullscreen.
pub const EXIT_GLYPH: &str = "⊠";

/// Callback registered for button clicks.
pub type ClickListener = Box<dyn FnMut()>;

/// A button whose label can be replaced.
pub trait GlyphButton {
    fn set_glyph(&mut self, glyph: &str);

    fn add_click_listener(&mut self, listener: ClickListener);
}

/// Fullscreen button bound to a host.
///
/// Clicks toggle fullscreen. The glyph also follows the host's own
/// fullscreen-change signal, so leaving fullscreen with Escape resets it.
pub struct FullscreenToggle<P, B> {
    platform: Rc<RefCell<P>>,
    button: Rc<RefCell<B>>,
}

impl<P, B> FullscreenToggle<P, B>
where
    P: FullscreenPlatform + 'static,
    B: GlyphButton + 'static,
{
    /// Wire `button` to the host: a click listener on the button and a
    /// fullscreen-change listener on the host. Returns `None` when the host
    /// has no fullscreen API.
    pub fn bind(platform: Rc<RefCell<P>>, button: Rc<RefCell<B>>) -> Option<Self> {
        if platform.borrow().fullscreen_api().is_unsupported() {
            debug!("fullscreen API unavailable, button left unbound");
            return None;
        }

        let listener_button = Rc::clone(&button);
        platform
            .borrow_mut()
            .add_fullscreen_listener(Box::new(move |active: bool| {
                if !active {
                    listener_button.borrow_mut().set_glyph(ENTER_GLYPH);
                }
            }));

        // weak: the button owns this closure
        let click_platform = Rc::downgrade(&platform);
        let click_button = Rc::downgrade(&button);
        button
            .borrow_mut()
            .add_click_listener(Box::new(move || {
                if let (Some(platform), Some(button)) =
                    (click_platform.upgrade(), click_button.upgrade())
                {
                    toggle_fullscreen(&platform, &button);
                }
            }));

        Some(Self { platform, button })
    }

    /// Same as a click on the bound button.
    pub fn click(&self) {
        toggle_fullscreen(&self.platform, &self.button);
    }

    pub fn button(&self) -> &Rc<RefCell<B>> {
        &self.button
    }
}

/// Enter fullscreen if nothing is fullscreen, else exit.
fn toggle_fullscreen<P: FullscreenPlatform, B: GlyphButton>(
    platform: &RefCell<P>,
    button: &RefCell<B>,
) {
    let mut platform = platform.borrow_mut();
    if platform.is_fullscreen() {
        if let Err(e) = platform.exit_fullscreen() {
            debug!("exit fullscreen failed: {e}");
        }
        button.borrow_mut().set_glyph(ENTER_GLYPH);
    } else {
        // hosts may refuse for policy reasons; that is not an error here
        if let Err(e) = platform.request_fullscreen() {
            debug!("fullscreen request rejected: {e}");
        }
        button.borrow_mut().set_glyph(EXIT_GLYPH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockButton, MockFullscreen};

    type Host = Rc<RefCell<MockFullscreen>>;
    type Button = Rc<RefCell<MockButton>>;

    fn bound(host: MockFullscreen) -> (FullscreenToggle<MockFullscreen, MockButton>, Host, Button) {
        let host = Rc::new(RefCell::new(host));
        let button = Rc::new(RefCell::new(MockButton::new(ENTER_GLYPH)));
        let toggle = FullscreenToggle::bind(Rc::clone(&host), Rc::clone(&button)).unwrap();
        (toggle, host, button)
    }

    #[test]
    fn bind_registers_both_listeners() {
        let (_toggle, host, button) = bound(MockFullscreen::new());
        assert_eq!(host.borrow().listener_count(), 1);
        assert_eq!(button.borrow().click_listener_count(), 1);
    }

    #[test]
    fn button_press_enters_then_exits() {
        let (_toggle, host, button) = bound(MockFullscreen::new());

        MockButton::press(&button);
        assert!(host.borrow().is_fullscreen());
        assert_eq!(button.borrow().glyph(), EXIT_GLYPH);

        MockButton::press(&button);
        assert!(!host.borrow().is_fullscreen());
        assert_eq!(host.borrow().exits(), 1);
        assert_eq!(button.borrow().glyph(), ENTER_GLYPH);
    }

    #[test]
    fn click_matches_button_press() {
        let (toggle, host, button) = bound(MockFullscreen::new());
        toggle.click();
        assert!(host.borrow().is_fullscreen());
        assert_eq!(button.borrow().glyph(), EXIT_GLYPH);
    }

    #[test]
    fn rejected_request_is_swallowed() {
        let (_toggle, host, button) = bound(MockFullscreen::new().rejecting());

        MockButton::press(&button);
        assert_eq!(host.borrow().requests(), 1);
        assert!(!host.borrow().is_fullscreen());
        assert_eq!(button.borrow().glyph(), EXIT_GLYPH);
    }

    #[test]
    fn no_api_leaves_button_unbound() {
        let host = Rc::new(RefCell::new(MockFullscreen::new().without_api()));
        let button = Rc::new(RefCell::new(MockButton::new(ENTER_GLYPH)));
        assert!(FullscreenToggle::bind(Rc::clone(&host), Rc::clone(&button)).is_none());
        assert_eq!(host.borrow().listener_count(), 0);
        assert_eq!(button.borrow().click_listener_count(), 0);

        MockButton::press(&button);
        assert_eq!(host.borrow().requests(), 0);
    }

    #[test]
    fn press_after_host_is_gone_does_nothing() {
        let button = Rc::new(RefCell::new(MockButton::new(ENTER_GLYPH)));
        {
            let host = Rc::new(RefCell::new(MockFullscreen::new()));
            let _ = FullscreenToggle::bind(host, Rc::clone(&button));
        }
        MockButton::press(&button);
        assert_eq!(button.borrow().glyph(), ENTER_GLYPH);
    }
}
