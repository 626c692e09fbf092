use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use bento_core::{
    BentoAction, BentoConfig, BentoState, CellFrame, FrameLayout, GridFrame, ParticleFrame,
    ViewportMode,
};

use crate::app_config;
use crate::assets::{image_src, FALLBACK_GLYPH};
use crate::input::{self, grid_rect};
use crate::switch_view::AdaptiveSwitch;

#[derive(Clone, PartialEq)]
struct BentoView {
    state: BentoState,
    now_ms: f64,
}

#[derive(Clone)]
struct BentoStore {
    view: UseStateHandle<BentoView>,
    live: Rc<RefCell<BentoState>>,
}

impl BentoStore {
    fn new(view: UseStateHandle<BentoView>, live: Rc<RefCell<BentoState>>) -> Self {
        Self { view, live }
    }

    fn dispatch(&self, action: BentoAction) -> bool {
        let (changed, before, after) = {
            let mut state = self.live.borrow_mut();
            let before = (state.is_mobile, state.adaptive_enabled);
            let changed = state.apply(&action);
            (changed, before, (state.is_mobile, state.adaptive_enabled))
        };
        if !changed {
            return false;
        }
        if before.0 != after.0 {
            let mode = match ViewportMode::from_mobile(after.0) {
                ViewportMode::Mobile => "mobile",
                ViewportMode::Desktop => "desktop",
            };
            gloo::console::log!("viewport mode", mode);
        }
        if before.1 != after.1 {
            gloo::console::log!("adaptive grid", after.1);
        }
        self.publish();
        true
    }

    fn publish(&self) {
        self.view.set(BentoView {
            state: self.live.borrow().clone(),
            now_ms: input::now_ms(),
        });
    }

    fn burst_active(&self) -> bool {
        self.live.borrow().burst.is_some()
    }

    fn sync_viewport(&self) {
        let Some((width, _)) = input::viewport_size() else {
            return;
        };
        self.dispatch(BentoAction::Resize {
            viewport_width: width,
        });
    }
}

impl PartialEq for BentoStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.live, &other.live)
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule_burst_frame(store: BentoStore, slot: FrameSlot) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_| {
        next_slot.borrow_mut().take();
        store.dispatch(BentoAction::Tick {
            now_ms: input::now_ms(),
        });
        if store.burst_active() {
            schedule_burst_frame(store, next_slot);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let config = use_memo((), |_| app_config::load_config());
    html! { <BentoGrid config={*config} /> }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BentoGridProps {
    pub config: BentoConfig,
}

#[function_component(BentoGrid)]
pub(crate) fn bento_grid(props: &BentoGridProps) -> Html {
    let config = props.config;
    let live = use_mut_ref(|| {
        let width = input::viewport_size().map(|(width, _)| width).unwrap_or(0.0);
        BentoState::new(&config, width)
    });
    let view = {
        let live = live.clone();
        use_state(move || BentoView {
            state: live.borrow().clone(),
            now_ms: input::now_ms(),
        })
    };
    let store = BentoStore::new(view.clone(), live);
    let grid_ref = use_node_ref();
    let burst_frame: FrameSlot = use_mut_ref(|| None);

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            store.sync_viewport();
            let listener = web_sys::window().map(|window| {
                let store = store.clone();
                EventListener::new(&window, "resize", move |_| store.sync_viewport())
            });
            move || drop(listener)
        });
    }

    {
        let store = store.clone();
        use_effect_with(config.adaptive, move |enabled| {
            store.dispatch(BentoAction::SetAdaptive { enabled: *enabled });
        });
    }

    let adaptive_active = view.state.adaptive_active();
    {
        let store = store.clone();
        let grid_ref = grid_ref.clone();
        use_effect_with(adaptive_active, move |active| {
            let listener = if *active {
                grid_ref.cast::<Element>().map(|element| {
                    let container = element.clone();
                    EventListener::new(&element, "pointermove", move |event| {
                        let Some(event) = event.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        store.dispatch(BentoAction::PointerMove {
                            client_x: event.client_x() as f32,
                            client_y: event.client_y() as f32,
                            container: grid_rect(&container),
                        });
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let burst_key = view
        .state
        .burst
        .map(|burst| (burst.cell, burst.started_ms.to_bits()));
    {
        let store = store.clone();
        let burst_frame = burst_frame.clone();
        use_effect_with(burst_key, move |key| {
            if key.is_some() {
                schedule_burst_frame(store, burst_frame.clone());
            }
            move || {
                burst_frame.borrow_mut().take();
            }
        });
    }

    let on_toggle = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            store.dispatch(BentoAction::ToggleAdaptive);
        })
    };

    let frame = GridFrame::build(&view.state, view.now_ms);
    let (grid_class, grid_style) = match &frame.layout {
        FrameLayout::Grid {
            column_template,
            row_template,
        } => (
            "bento-grid bento-grid--desktop",
            Some(format!(
                "grid-template-columns: {column_template}; grid-template-rows: {row_template};"
            )),
        ),
        FrameLayout::Stack => ("bento-grid bento-grid--mobile", None),
    };
    let cells: Html = frame
        .cells
        .iter()
        .map(|cell| {
            html! {
                <BentoCell
                    key={cell.index}
                    cell={cell.clone()}
                    mobile={view.state.is_mobile}
                    store={store.clone()}
                />
            }
        })
        .collect();

    html! {
        <div class="bento-page">
            if frame.show_switch {
                <AdaptiveSwitch enabled={frame.adaptive_enabled} {on_toggle} />
            }
            <div ref={grid_ref} class={grid_class} style={grid_style}>
                { cells }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BentoCellProps {
    cell: CellFrame,
    mobile: bool,
    store: BentoStore,
}

#[function_component(BentoCell)]
fn bento_cell(props: &BentoCellProps) -> Html {
    let cell = &props.cell;
    let index = cell.index;
    let image_failed = use_state(|| false);

    let on_enter = {
        let store = props.store.clone();
        Callback::from(move |_: PointerEvent| {
            store.dispatch(BentoAction::PointerEnter {
                cell: index,
                now_ms: input::now_ms(),
            });
        })
    };
    let on_leave = {
        let store = props.store.clone();
        Callback::from(move |_: PointerEvent| {
            store.dispatch(BentoAction::PointerLeave { cell: index });
        })
    };
    let on_click = {
        let store = props.store.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(BentoAction::Tap {
                cell: index,
                now_ms: input::now_ms(),
            });
        })
    };
    let on_image_error = {
        let image_failed = image_failed.clone();
        let image = cell.image;
        Callback::from(move |_: Event| {
            gloo::console::warn!("image failed to load", image.file_name());
            image_failed.set(true);
        })
    };

    let mut style = format!("z-index: {}; transform: {};", cell.z_index, cell.transform());
    if let Some(placement) = cell.placement {
        style.push(' ');
        style.push_str(&placement.css());
    }
    let class = classes!(
        "bento-cell",
        props.mobile.then_some("bento-cell--stacked"),
        cell.focused.then_some("bento-cell--focused")
    );
    let image_class = if cell.contain {
        "bento-image bento-image--contain"
    } else {
        "bento-image bento-image--cover"
    };
    let media = if *image_failed {
        html! { <span class="bento-fallback" aria-hidden="true">{ FALLBACK_GLYPH }</span> }
    } else {
        html! {
            <img
                class={image_class}
                src={image_src(cell.image)}
                alt={format!("Bento {index}")}
                onerror={on_image_error}
            />
        }
    };
    let particles: Html = cell.particles.iter().map(particle_view).collect();

    html! {
        <div
            {class}
            {style}
            data-cell={index.to_string()}
            onpointerenter={on_enter}
            onpointerleave={on_leave}
            onclick={on_click}
        >
            <div class="bento-cell-content">
                { media }
                if let Some(label) = cell.label {
                    <div class="bento-label">{ label }</div>
                }
            </div>
            { particles }
        </div>
    }
}

fn particle_view(particle: &ParticleFrame) -> Html {
    let style = format!(
        "transform: translate(-50%, -50%) translate({}px, {}px) scale({}); opacity: {};",
        particle.dx, particle.dy, particle.scale, particle.opacity
    );
    html! { <div class="bento-particle" {style} /> }
}

pub(crate) fn run() {
    yew::Renderer::<App>::new().render();
}
