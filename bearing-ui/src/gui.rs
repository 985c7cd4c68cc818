use gpui::{
    AnyElement, AnyView, App, AppContext, Application, Context, Entity, IntoElement, KeyBinding,
    Menu, MenuItem, ParentElement, Styled, TitlebarOptions, WindowBounds, WindowOptions, div,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::components::{AppWindow, FormSettings, SpecificationForm, WindowPreferences};
use crate::config::AppConfig;
use crate::themes::{FormStyle, apply_form_style};
use crate::{Quit, quit};

pub fn setup_app(
    app_cx: &mut App,
    style: FormStyle,
) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    apply_form_style(style, app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Bearing Specification".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Content factory for [`AppWindow`]: the form, centered.
pub fn build_main_content(form: Entity<SpecificationForm>) -> impl Fn() -> AnyElement + 'static {
    move || {
        div()
            .w_full()
            .px_6()
            .flex()
            .justify_center()
            .child(form.clone())
            .into_any_element()
    }
}

/// Opens the form window and blocks until the app quits.
pub fn run_gui(
    config: AppConfig,
    settings: FormSettings,
) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx, settings.style);

            let prefs = WindowPreferences::from_config(&config);
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::centered(prefs.size, cx)),
                titlebar: Some(TitlebarOptions {
                    title: Some(settings.style.title().into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(options, |window, cx| {
                let form = cx.new(|form_cx: &mut Context<SpecificationForm>| {
                    SpecificationForm::new(settings.clone(), window, form_cx)
                });
                let app_window = cx.new(|win_cx: &mut Context<AppWindow>| {
                    let mut app_window = AppWindow::new(win_cx);
                    app_window.set_content(build_main_content(form));
                    app_window
                });
                cx.new(|root_cx| Root::new(AnyView::from(app_window), window, root_cx))
            });

            match opened {
                Ok(_) => info!(style = %settings.style, "main window opened"),
                Err(e) => {
                    error!(error = %e, "cannot open main window");
                    cx.quit();
                }
            }
        });
}
