//! The bearing specification form.
//!
//! Widget entities hold what the user is typing; [`FormState`] is the single
//! source of truth for what gets generated. Every widget change is turned
//! into a [`FormAction`] and run through the reducer.

use std::sync::Arc;

use bearing_core::models::Seal;
use bearing_core::models::catalog::{bearing_type_options, sub_type_options};
use bearing_core::service::{self, SpecificationService};
use bearing_core::{CATEGORY, Field, FormAction, FormState, GeneratedOutput};
use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{
    Disableable, IndexPath, Sizable, h_flex,
    button::{Button, ButtonVariants},
    checkbox::Checkbox,
    input::{Input, InputEvent, InputState},
    select::{Select, SelectEvent, SelectState},
    v_flex,
};
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::components::make_button;
use crate::logging::log_task_error;
use crate::themes::{FormPalette, FormStyle};

type Choice = Entity<SelectState<Vec<SharedString>>>;

/// What the form needs from the rest of the app.
#[derive(Clone)]
pub struct FormSettings {
    pub service: Arc<dyn SpecificationService>,
    /// Runtime the backend call runs on; gpui's executor does not drive
    /// tokio I/O.
    pub runtime: Handle,
    pub style: FormStyle,
    pub fallback_on_error: bool,
}

pub struct SpecificationForm {
    state: FormState,
    settings: FormSettings,

    bearing_type: Choice,
    sub_type: Choice,
    seal: Choice,
    number: Entity<InputState>,
    suffixes: Entity<InputState>,
    make: Entity<InputState>,

    _subscriptions: Vec<Subscription>,
}

impl SpecificationForm {
    pub fn new(
        settings: FormSettings,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let bearing_type = make_choice(bearing_type_options(), window, cx);
        let sub_type = make_choice(sub_type_options(), window, cx);
        let seal = make_choice(
            Seal::ALL.iter().map(Seal::to_long_str).collect(),
            window,
            cx,
        );

        let number = make_text_input(Field::Number, window, cx);
        let suffixes = make_text_input(Field::Suffixes, window, cx);
        let make = make_text_input(Field::Make, window, cx);

        let mut subscriptions = Vec::new();
        for (field, choice) in [
            (Field::BearingType, &bearing_type),
            (Field::SubType, &sub_type),
            (Field::Seal, &seal),
        ] {
            subscriptions.push(cx.subscribe_in(
                choice,
                window,
                move |this, _, event: &SelectEvent<Vec<SharedString>>, _, cx| {
                    if let SelectEvent::Confirm(Some(label)) = event {
                        this.on_edit(field, choice_value(field, label), cx);
                    }
                },
            ));
        }
        for (field, input) in [
            (Field::Number, &number),
            (Field::Suffixes, &suffixes),
            (Field::Make, &make),
        ] {
            subscriptions.push(cx.subscribe_in(
                input,
                window,
                move |this, input, event: &InputEvent, _, cx| {
                    if let InputEvent::Change { .. } = event {
                        let text = input.read(cx).value().to_string();
                        this.on_edit(field, text, cx);
                    }
                },
            ));
        }

        info!(
            backend = settings.service.backend_name(),
            style = %settings.style,
            "specification form ready"
        );

        Self {
            state: FormState::new(),
            settings,
            bearing_type,
            sub_type,
            seal,
            number,
            suffixes,
            make,
            _subscriptions: subscriptions,
        }
    }

    fn dispatch(
        &mut self,
        action: FormAction,
        cx: &mut Context<Self>,
    ) {
        self.state = std::mem::take(&mut self.state).reduce(action);
        cx.notify();
    }

    /// Widgets also report programmatic changes; only real edits reach the
    /// reducer so they do not clear the output.
    fn on_edit(
        &mut self,
        field: Field,
        text: String,
        cx: &mut Context<Self>,
    ) {
        if self.state.value(field) != text {
            self.dispatch(FormAction::SetField(field, text), cx);
        }
    }

    /// Sends the current values to the backend. Ignored while a submission
    /// is in flight. The reply is dropped by the reducer if the form was
    /// reset or edited before it arrived.
    fn submit(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        if !self.state.can_submit() {
            debug!("submission already pending");
            return;
        }
        self.dispatch(FormAction::SubmitStarted, cx);
        let submission = self.state.submission;

        let backend = self.settings.service.clone();
        let request = self.state.request.clone();
        let fallback = self.settings.fallback_on_error;
        let task = self
            .settings
            .runtime
            .spawn(async move {
                service::submit(backend.as_ref(), &request, fallback, submission).await
            });

        cx.spawn(async move |this, cx| {
            let action = task.await.unwrap_or_else(|e| FormAction::SubmitFailed {
                submission,
                message: format!("generation task failed: {e}"),
                fallback: None,
            });
            log_task_error(
                "apply generation result",
                this.update(cx, |form, cx| form.dispatch(action, cx)),
            );
        })
        .detach();
    }

    /// Restores every default, in the state and in the widgets.
    fn reset(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.dispatch(FormAction::Reset, cx);

        for choice in [&self.bearing_type, &self.sub_type, &self.seal] {
            choice.update(cx, |state, cx| {
                state.set_selected_index(Some(IndexPath::default()), window, cx)
            });
        }
        for input in [&self.number, &self.suffixes, &self.make] {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        info!("form reset");
    }

    fn render_header(
        &self,
        palette: &FormPalette,
    ) -> Div {
        let style = self.settings.style;
        let header = v_flex()
            .w_full()
            .gap_2()
            .p_6()
            .bg(palette.header_bg)
            .text_color(palette.header_fg)
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .child(style.title()),
            )
            .child(div().text_sm().child(style.subtitle()));

        match style {
            FormStyle::Classic => header.items_center().rounded_t_lg(),
            FormStyle::Hero => header.rounded_lg(),
        }
    }

    fn render_fields(
        &self,
        palette: &FormPalette,
        cx: &mut Context<Self>,
    ) -> Div {
        let style = self.settings.style;
        let label = |field: Field| style.label(field);

        let category = div()
            .w_full()
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(palette.border)
            .text_color(palette.muted_text)
            .child(CATEGORY);

        let c3 = Checkbox::new("c3")
            .label(label(Field::C3))
            .checked(self.state.request.has_c3)
            .on_click(cx.listener(|this, checked: &bool, _, cx| {
                this.dispatch(FormAction::SetC3(*checked), cx)
            }));

        v_flex()
            .w_full()
            .gap_4()
            .child(make_labeled_field(label(Field::Category), palette, category))
            .child(
                h_flex()
                    .w_full()
                    .gap_4()
                    .child(make_labeled_field(
                        label(Field::BearingType),
                        palette,
                        Select::new(&self.bearing_type).w_full(),
                    ))
                    .child(make_labeled_field(
                        label(Field::SubType),
                        palette,
                        Select::new(&self.sub_type).w_full(),
                    )),
            )
            .child(
                h_flex()
                    .w_full()
                    .gap_4()
                    .child(make_labeled_field(
                        label(Field::Number),
                        palette,
                        Input::new(&self.number),
                    ))
                    .child(make_labeled_field(
                        label(Field::Seal),
                        palette,
                        Select::new(&self.seal).w_full(),
                    )),
            )
            .child(
                h_flex()
                    .w_full()
                    .gap_4()
                    .items_end()
                    .child(make_labeled_field(
                        label(Field::Suffixes),
                        palette,
                        Input::new(&self.suffixes),
                    ))
                    .child(div().flex_1().pb_2().child(c3)),
            )
            .child(make_labeled_field(
                label(Field::Make),
                palette,
                Input::new(&self.make),
            ))
    }

    fn render_actions(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let pending = self.state.pending;
        let generate_label = if pending {
            "Generating..."
        } else {
            "Generate Specification"
        };

        h_flex()
            .w_full()
            .gap_4()
            .justify_center()
            .child(
                make_button(
                    "generate",
                    generate_label,
                    cx.listener(|this, _: &ClickEvent, _, cx| this.submit(cx)),
                )
                .disabled(pending),
            )
            .child(
                Button::new("reset")
                    .ghost()
                    .large()
                    .label("Reset")
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.reset(window, cx)
                    })),
            )
    }

    fn render_output(
        &self,
        output: &GeneratedOutput,
        palette: &FormPalette,
    ) -> Div {
        let style = self.settings.style;
        let make = self.state.request.make.trim();

        v_flex()
            .w_full()
            .gap_3()
            .child(make_result_card(
                "Generated Specification",
                output.specification.clone(),
                palette,
            ))
            .child(make_result_card(
                "Description",
                output.description.clone(),
                palette,
            ))
            .when(style.shows_make_card() && !make.is_empty(), |this| {
                this.child(make_result_card(
                    "Make / Application",
                    make.to_string(),
                    palette,
                ))
            })
    }
}

impl Render for SpecificationForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let palette = self.settings.style.palette();

        let error = self.state.error.clone().map(|message| {
            div()
                .w_full()
                .p_3()
                .rounded_md()
                .bg(palette.error_bg)
                .text_color(palette.error_text)
                .child(message)
        });
        let output = self
            .state
            .output
            .as_ref()
            .map(|output| self.render_output(output, &palette));
        let footer = self.settings.style.footer().map(|text| {
            div()
                .w_full()
                .pt_2()
                .text_xs()
                .text_color(palette.muted_text)
                .child(text)
        });

        v_flex()
            .w_full()
            .max_w(px(760.))
            .my_6()
            .rounded_lg()
            .border_1()
            .border_color(palette.border)
            .bg(palette.surface)
            .text_color(palette.text)
            .child(self.render_header(&palette))
            .child(
                v_flex()
                    .w_full()
                    .gap_5()
                    .p_6()
                    .child(self.render_fields(&palette, cx))
                    .child(self.render_actions(cx))
                    .children(error)
                    .children(output)
                    .children(footer),
            )
    }
}

/// Maps a selector label back to the request value. Seal selectors show the
/// long label but the request carries the short designation.
fn choice_value(
    field: Field,
    label: &SharedString,
) -> String {
    match field {
        Field::Seal => Seal::parse(label.as_ref())
            .map(|seal| seal.as_str().to_string())
            .unwrap_or_else(|| label.to_string()),
        _ => label.to_string(),
    }
}

/// Selector whose first option (the form default) starts selected.
fn make_choice(
    options: Vec<&'static str>,
    window: &mut Window,
    cx: &mut Context<SpecificationForm>,
) -> Choice {
    let options: Vec<SharedString> = options.into_iter().map(SharedString::from).collect();
    cx.new(|cx| SelectState::new(options, Some(IndexPath::default()), window, cx))
}

fn make_text_input(
    field: Field,
    window: &mut Window,
    cx: &mut Context<SpecificationForm>,
) -> Entity<InputState> {
    cx.new(|cx| {
        InputState::new(window, cx).placeholder(field.placeholder().unwrap_or_default())
    })
}

fn make_labeled_field(
    label: impl Into<SharedString>,
    palette: &FormPalette,
    input: impl IntoElement,
) -> Div {
    v_flex()
        .flex_1()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(palette.muted_text)
                .child(label.into()),
        )
        .child(input)
}

fn make_result_card(
    title: &'static str,
    body: String,
    palette: &FormPalette,
) -> Div {
    v_flex()
        .w_full()
        .gap_1()
        .p_4()
        .rounded_md()
        .border_l_4()
        .border_color(palette.result_accent)
        .bg(palette.result_bg)
        .child(
            div()
                .text_xs()
                .font_weight(FontWeight::BOLD)
                .text_color(palette.result_accent)
                .child(title),
        )
        .child(div().text_base().child(body))
}
