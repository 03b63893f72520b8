//! Multi-select dropdowns of the sidebar and their outside-click handling.

use super::options::FilterFamily;
use super::state::FilterState;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Open/closed flags of the three dropdowns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dropdowns {
    model: DropdownState,
    socket: DropdownState,
    platform: DropdownState,
}

impl Dropdowns {
    fn slot(&mut self, family: FilterFamily) -> &mut DropdownState {
        match family {
            FilterFamily::Model => &mut self.model,
            FilterFamily::Socket => &mut self.socket,
            FilterFamily::Platform => &mut self.platform,
        }
    }

    pub fn state(&self, family: FilterFamily) -> DropdownState {
        match family {
            FilterFamily::Model => self.model,
            FilterFamily::Socket => self.socket,
            FilterFamily::Platform => self.platform,
        }
    }

    pub fn is_open(&self, family: FilterFamily) -> bool {
        self.state(family) == DropdownState::Open
    }

    pub fn toggle(&mut self, family: FilterFamily) {
        let slot = self.slot(family);
        *slot = match *slot {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        };
    }

    /// Close every open dropdown the pointer landed outside of.
    /// Returns true if anything changed.
    pub fn on_pointer_down(&mut self, is_outside: impl Fn(FilterFamily) -> bool) -> bool {
        let mut changed = false;
        for family in FilterFamily::all() {
            if self.is_open(family) && is_outside(family) {
                *self.slot(family) = DropdownState::Closed;
                changed = true;
            }
        }
        changed
    }
}

/// Rendered containers of the dropdowns, used for hit testing
#[derive(Clone, Copy)]
pub struct DropdownRefs {
    pub model: NodeRef<Div>,
    pub socket: NodeRef<Div>,
    pub platform: NodeRef<Div>,
}

impl DropdownRefs {
    pub fn new() -> Self {
        Self {
            model: NodeRef::new(),
            socket: NodeRef::new(),
            platform: NodeRef::new(),
        }
    }

    pub fn get(&self, family: FilterFamily) -> NodeRef<Div> {
        match family {
            FilterFamily::Model => self.model,
            FilterFamily::Socket => self.socket,
            FilterFamily::Platform => self.platform,
        }
    }

    fn is_outside(&self, family: FilterFamily, target: Option<&web_sys::Node>) -> bool {
        let contains_target = self
            .get(family)
            .get_untracked()
            .map(|container| container.contains(target));
        lands_outside(contains_target)
    }
}

/// Hit test result for one dropdown: `None` when its container is not
/// mounted, otherwise whether the container holds the event target.
/// An unmounted dropdown never counts as "outside".
fn lands_outside(contains_target: Option<bool>) -> bool {
    contains_target == Some(false)
}

impl Default for DropdownRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Один глобальный обработчик `mousedown` на все выпадающие списки.
/// Снимается при размонтировании компонента-владельца.
pub fn close_on_outside_click(dropdowns: RwSignal<Dropdowns>, refs: DropdownRefs) {
    let handle = window_event_listener(ev::mousedown, move |ev: ev::MouseEvent| {
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        dropdowns.maybe_update(|state| {
            state.on_pointer_down(|family| refs.is_outside(family, target.as_ref()))
        });
    });
    on_cleanup(move || handle.remove());
}

#[component]
pub fn MultiSelectDropdown(
    family: FilterFamily,
    filters: RwSignal<FilterState>,
    dropdowns: RwSignal<Dropdowns>,
    node_ref: NodeRef<Div>,
) -> impl IntoView {
    let is_open = move || dropdowns.with(|d| d.is_open(family));
    let has_selection = move || filters.with(|f| !f.family(family).is_empty());

    view! {
        <div class="filter-dropdown" node_ref=node_ref>
            <label class="filter-sidebar__label">{family.label()}</label>
            <div
                class="filter-dropdown__trigger"
                on:click=move |_| dropdowns.update(|d| d.toggle(family))
            >
                {move || {
                    let selected = filters.with(|f| f.family(family).selected().to_vec());
                    if selected.is_empty() {
                        view! { <span>"Sélectionner"</span> }.into_any()
                    } else {
                        view! {
                            <div class="filter-dropdown__chips">
                                {selected
                                    .into_iter()
                                    .map(|label| view! { <span class="filter-dropdown__chip">{label}</span> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
                {icon("chevron-down")}
            </div>

            <Show when=is_open>
                <div class="filter-dropdown__menu">
                    <div class="filter-dropdown__options">
                        {family
                            .candidates()
                            .iter()
                            .map(|&label| {
                                view! {
                                    <div
                                        class="filter-dropdown__option"
                                        class:filter-dropdown__option--selected=move || {
                                            filters.with(|f| f.family(family).is_selected(label))
                                        }
                                        on:click=move |_| filters.update(|f| f.toggle(family, label))
                                    >
                                        {label}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Show when=has_selection>
                        <div class="filter-dropdown__footer">
                            <button
                                class="filter-dropdown__clear"
                                on:click=move |_| filters.update(|f| f.clear(family))
                            >
                                "Clear All"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
