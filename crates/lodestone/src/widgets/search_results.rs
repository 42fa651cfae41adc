//! The full search results page.

use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use lodestone_core::config::{
    merge_props, FilterSpec, ResolvedConfig, SyncUrlMode, ViewType, WidgetMode, WidgetParams,
};
use lodestone_core::context::{build_search_context, SearchContext};
use lodestone_core::error::ConfigError;
use lodestone_core::sync::{query_string, LocationStore, ParamValue};
use lodestone_core::utils::ranges::param_to_range;

use crate::hooks::{
    use_breakpoints, use_location, use_query_param, QueryParamOptions, DEFAULT_DEBOUNCE_MS,
};
use crate::widgets::SearchRequest;

type Resolved = Result<(Rc<ResolvedConfig>, Rc<SearchContext>), ConfigError>;

/// Renders the results page: input, status, sorting, filters, the
/// results region, and pagination.
///
/// Live state (query text, sort, page, page size, filter selections)
/// mirrors onto the URL per the resolved `syncURL` mode, and every
/// change is emitted through `on_search` for the host's transport
/// layer. The resolved [`SearchContext`] is provided as context so a
/// transport rendered beneath this widget can pick it up.
#[component]
pub fn SearchResults(
    widget_id: String,
    params: WidgetParams,
    on_search: Option<EventHandler<SearchRequest>>,
) -> Element {
    let location = use_location();
    let resolved: Resolved = use_hook({
        let params = params.clone();
        let widget_id = widget_id.clone();
        move || {
            let config = merge_props(&params, &widget_id)?;
            let context =
                build_search_context(&params, config.fields.clone(), config.tracking.clone());
            Ok((Rc::new(config), Rc::new(context)))
        }
    });
    let (config, search_context) = match resolved {
        Ok(pair) => pair,
        Err(err) => {
            return rsx! {
                div { class: "ls-widget ls-widget--error", "Search widget configuration error: {err}" }
            };
        }
    };
    use_context_provider(|| search_context);

    let options = &config.options;
    let sync = options.sync_url;
    // Overlay-hosted results never touch the address bar; the modal is
    // transient state.
    let disabled = sync == SyncUrlMode::None || options.mode == WidgetMode::Overlay;
    let replace = sync == SyncUrlMode::Replace;
    let q_key = options.url_params.q.clone();
    let default_per_page = options.results_per_page.initial();

    // Initial state comes off the URL so a shared link restores the
    // search it described.
    let search = location.search();
    let read_param = |key: &str| query_string::get(&search, key).unwrap_or_default();
    let initial_query = read_param(&q_key);
    let initial_sort = read_param("sort");
    let initial_page = read_param("page")
        .parse::<u32>()
        .ok()
        .filter(|page| *page >= 1)
        .unwrap_or(1);
    let initial_per_page = read_param("show").parse::<u32>().ok().unwrap_or(default_per_page);

    let mut query = use_signal(move || initial_query);
    let mut sort = use_signal(move || initial_sort);
    let mut page = use_signal(move || initial_page);
    let mut per_page = use_signal(move || initial_per_page);
    let mut filter_values = use_signal(Vec::<(String, Vec<String>)>::new);

    let emit = use_callback(move |_: ()| {
        if let Some(handler) = on_search {
            handler.call(SearchRequest {
                query: query.peek().clone(),
                sort: sort.peek().clone(),
                page: *page.peek(),
                per_page: *per_page.peek(),
                filters: filter_values.peek().clone(),
            });
        }
    });

    let q_param = use_query_param(
        &q_key,
        QueryParamOptions {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            replace,
            disabled,
            on_change: Some(use_callback(move |value: String| {
                query.set(value);
                emit.call(());
            })),
            ..QueryParamOptions::default()
        },
    );
    let sort_param = use_query_param(
        "sort",
        QueryParamOptions {
            replace,
            disabled,
            on_change: Some(use_callback(move |value: String| {
                sort.set(value);
                emit.call(());
            })),
            ..QueryParamOptions::default()
        },
    );
    let page_param = use_query_param(
        "page",
        QueryParamOptions {
            default_value: Some(1.into()),
            replace,
            disabled,
            on_change: Some(use_callback(move |value: String| {
                page.set(value.parse().ok().filter(|p| *p >= 1).unwrap_or(1));
                emit.call(());
            })),
            ..QueryParamOptions::default()
        },
    );
    let show_param = use_query_param(
        "show",
        QueryParamOptions {
            default_value: Some((default_per_page as i32).into()),
            replace,
            disabled,
            on_change: Some(use_callback(move |value: String| {
                per_page.set(value.parse().ok().unwrap_or(default_per_page));
                emit.call(());
            })),
            ..QueryParamOptions::default()
        },
    );

    // State changes that start a new result set go back to page one.
    let reset_page = use_callback(move |_: ()| {
        if *page.peek() != 1 {
            page.set(1);
            page_param.set(1);
        }
    });

    let on_filter_change = use_callback(move |(name, values): (String, Vec<String>)| {
        let mut list = filter_values.write();
        match list.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = values,
            None => list.push((name, values)),
        }
        drop(list);
        reset_page.call(());
        emit.call(());
    });

    let breakpoints = use_breakpoints();
    let view_type = if breakpoints().md {
        options.results.view_type
    } else {
        options.results.mobile_view_type
    };
    let ratios = match options.results.image_aspect_ratio {
        lodestone_core::config::AspectRatio::Split(ratios) => ratios,
        lodestone_core::config::AspectRatio::Uniform(ratio) => {
            lodestone_core::config::LayoutRatios {
                grid: Some(ratio),
                list: Some(ratio),
            }
        }
    };
    let (view_class, image_ratio) = match view_type {
        ViewType::Grid => ("ls-results--grid", ratios.grid_or_square()),
        ViewType::List => ("ls-results--list", ratios.list_or_square()),
    };

    let change_page = {
        let pagination = options.pagination.clone();
        move |next: u32| {
            page.set(next);
            page_param.set(next as i32);
            emit.call(());
            if pagination.scroll_to_top {
                scroll_to_target(pagination.scroll_target.as_deref());
            }
        }
    };
    let mut go_previous = {
        let mut change_page = change_page.clone();
        move |_| {
            let current = *page.peek();
            if current > 1 {
                change_page(current - 1);
            }
        }
    };
    let mut go_next = {
        let mut change_page = change_page;
        move |_| change_page(*page.peek() + 1)
    };

    let sorting = options.sorting.options.clone();
    let per_page_choices = options.results_per_page.options.clone();
    let placeholder = options
        .input
        .placeholder
        .clone()
        .unwrap_or_else(|| "Search".to_string());
    let show_input = !options.input.hide;
    let show_status = options.results.show_status;
    let filters = config.filters.clone();
    let input_position_class = match options.input.position {
        lodestone_core::config::InputPosition::Top => "ls-widget--input-top",
        lodestone_core::config::InputPosition::Aside => "ls-widget--input-aside",
    };

    rsx! {
        section { id: "{widget_id}", class: "ls-widget ls-search-results {input_position_class}",
            if show_input {
                div { class: "ls-input-row",
                    input {
                        class: "ls-input",
                        r#type: "search",
                        placeholder: "{placeholder}",
                        value: "{query}",
                        oninput: move |evt| {
                            let value = evt.value();
                            query.set(value.clone());
                            reset_page.call(());
                            q_param.set(value);
                            emit.call(());
                        },
                    }
                }
            }
            if show_status && !query().is_empty() {
                div { class: "ls-status", "Results for \u{201c}{query}\u{201d}" }
            }
            div { class: "ls-toolbar",
                if !sorting.is_empty() {
                    label { class: "ls-sorting",
                        "Sort by"
                        select {
                            class: "ls-select",
                            onchange: move |evt| {
                                let value = evt.value();
                                sort.set(value.clone());
                                reset_page.call(());
                                sort_param.set(value);
                                emit.call(());
                            },
                            for option in sorting.iter() {
                                option {
                                    key: "{option.name}",
                                    value: "{option.value}",
                                    selected: sort() == option.value,
                                    "{option.name}"
                                }
                            }
                        }
                    }
                }
                label { class: "ls-per-page",
                    "Results per page"
                    select {
                        class: "ls-select",
                        onchange: move |evt| {
                            let choice = evt.value().parse().unwrap_or(default_per_page);
                            per_page.set(choice);
                            reset_page.call(());
                            show_param.set(choice as i32);
                            emit.call(());
                        },
                        for choice in per_page_choices.iter() {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: per_page() == *choice,
                                "{choice}"
                            }
                        }
                    }
                }
            }
            div { class: "ls-body",
                if !filters.is_empty() {
                    aside { class: "ls-filters",
                        for filter in filters.iter() {
                            FilterControl {
                                key: "{filter.name}",
                                filter: filter.clone(),
                                replace,
                                disabled,
                                on_change: move |payload| on_filter_change.call(payload),
                            }
                        }
                    }
                }
                div {
                    class: "ls-results {view_class}",
                    style: "--ls-image-ratio: {image_ratio};",
                }
            }
            nav { class: "ls-pagination",
                button {
                    class: "ls-btn",
                    disabled: page() <= 1,
                    onclick: move |evt| go_previous(evt),
                    "Previous"
                }
                span { class: "ls-pagination-page", "Page {page}" }
                button { class: "ls-btn", onclick: move |evt| go_next(evt), "Next" }
            }
        }
    }
}

/// One filter's input plus its URL binding.
#[component]
fn FilterControl(
    filter: FilterSpec,
    replace: bool,
    disabled: bool,
    on_change: EventHandler<(String, Vec<String>)>,
) -> Element {
    let location = use_location();
    let initial = query_string::get(&location.search(), &filter.name)
        .map(|value| split_values(&value))
        .unwrap_or_default();
    let mut selected = use_signal(move || initial);

    let name = filter.name.clone();
    let param = use_query_param(
        &filter.name,
        QueryParamOptions {
            replace,
            disabled,
            on_change: Some(use_callback(move |value: String| {
                let values = split_values(&value);
                selected.set(values.clone());
                on_change.call((name.clone(), values));
            })),
            ..QueryParamOptions::default()
        },
    );

    let is_range = filter.range;
    let filter_name = filter.name.clone();
    let mut commit = move |text: String| {
        if is_range {
            if !text.is_empty() && param_to_range(&text).is_err() {
                debug!(filter = %filter_name, input = %text, "ignoring malformed range input");
                return;
            }
            let values = if text.is_empty() { Vec::new() } else { vec![text.clone()] };
            selected.set(values.clone());
            param.set(ParamValue::Text(text));
            on_change.call((filter_name.clone(), values));
        } else {
            let values = split_values(&text);
            selected.set(values.clone());
            param.set(ParamValue::List(values.clone()));
            on_change.call((filter_name.clone(), values));
        }
    };

    let current = selected().join(",");
    let hint = if filter.range { "min:max" } else { "comma-separated" };

    rsx! {
        fieldset { class: "ls-filter",
            legend { class: "ls-filter-title", "{filter.title}" }
            input {
                class: "ls-input ls-filter-input",
                r#type: "text",
                placeholder: "{hint}",
                value: "{current}",
                onchange: move |evt| commit(evt.value()),
            }
        }
    }
}

/// Splits an on-URL value into selections; empty input selects nothing.
fn split_values(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_target(target: Option<&str>) {
    if let Some(selector) = target {
        if let Some(element) = crate::dom::query_all(selector).into_iter().next() {
            element.scroll_into_view();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_target(_target: Option<&str>) {}
