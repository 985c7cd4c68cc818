use gpui::{
    AnyElement, App, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;

/// Top-level view of the main window. Closing it quits the app except on
/// Linux, where the platform keeps running until an explicit quit.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("main window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            _window_close_subscription: subscription,
            content: None,
        }
    }

    /// Set a factory that produces the window content on every render.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());

        // The form grows with the output cards; scroll rather than clip.
        div()
            .id("app-window")
            .v_flex()
            .size_full()
            .items_center()
            .overflow_y_scroll()
            .children(content)
    }
}
