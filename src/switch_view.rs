use gloo::events::EventListener;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use bento_core::switch::{knob_offset, SWITCH_HEIGHT_PX, SWITCH_WIDTH_PX};
use bento_core::{SwitchDrag, SwitchRelease};

use crate::input::{now_ms, viewport_size, PointerSample};

#[derive(Properties, PartialEq)]
pub(crate) struct AdaptiveSwitchProps {
    pub enabled: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(AdaptiveSwitch)]
pub(crate) fn adaptive_switch(props: &AdaptiveSwitchProps) -> Html {
    let drag = use_mut_ref(SwitchDrag::new);
    let position = {
        let drag = drag.clone();
        use_state(move || drag.borrow().position())
    };
    {
        let drag = drag.clone();
        let position = position.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    let Some(viewport) = viewport_size() else {
                        return;
                    };
                    let mut drag = drag.borrow_mut();
                    if drag.fit_viewport(viewport) {
                        position.set(drag.position());
                    }
                })
            });
            move || drop(listener)
        });
    }
    let on_pointer_down = {
        let drag = drag.clone();
        Callback::from(move |event: PointerEvent| {
            let sample = PointerSample::from_event(&event);
            drag.borrow_mut()
                .press(sample.id, sample.client_x, sample.client_y, now_ms());
            if let Some(target) = event.target_dyn_into::<Element>() {
                if let Err(err) = target.set_pointer_capture(event.pointer_id()) {
                    gloo::console::warn!("switch pointer capture failed", err);
                }
            }
        })
    };
    let on_pointer_move = {
        let drag = drag.clone();
        let position = position.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(viewport) = viewport_size() else {
                return;
            };
            let sample = PointerSample::from_event(&event);
            let mut drag = drag.borrow_mut();
            if drag.drag_to(sample.id, sample.client_x, sample.client_y, viewport) {
                position.set(drag.position());
            }
        })
    };
    let on_pointer_up = {
        let drag = drag.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: PointerEvent| {
            let sample = PointerSample::from_event(&event);
            let release = drag.borrow_mut().release(sample.id, now_ms());
            if release == SwitchRelease::Click {
                on_toggle.emit(());
            }
        })
    };
    let on_pointer_cancel = {
        let drag = drag.clone();
        Callback::from(move |_: PointerEvent| {
            drag.borrow_mut().cancel();
        })
    };
    let (left, top) = *position;
    let style = format!(
        "left: {left}px; top: {top}px; width: {SWITCH_WIDTH_PX}px; height: {SWITCH_HEIGHT_PX}px;"
    );
    let knob_style = format!("transform: translateX({}px);", knob_offset(props.enabled));
    let class = classes!(
        "bento-switch",
        props.enabled.then_some("bento-switch--on")
    );
    html! {
        <div
            {class}
            {style}
            role="switch"
            aria-checked={props.enabled.to_string()}
            aria-label="Adaptive grid"
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up}
            onpointercancel={on_pointer_cancel}
        >
            <div class="bento-switch-knob" style={knob_style} />
        </div>
    }
}
