//! Widget configuration: the caller-facing parameter model, the typed
//! options tree, and the resolution pipeline that layers defaults,
//! preset, and caller overrides into one effective configuration.

pub mod merge;
pub mod options;
pub mod params;
pub mod preset;
pub mod resolve;
pub mod tracking;

pub use merge::{deep_merge, ArrayHandling, MergeOptions};
pub use options::{
    AspectRatio, InputMode, InputOptions, InputPosition, LayoutObjectFit, LayoutRatios, ObjectFit,
    PaginationOptions, ResultsOptions, ResultsPerPageOptions, Selectors, SortOption,
    SortingOptions, SyncUrlMode, UrlParams, ViewType, WidgetMode, WidgetOptions,
};
pub use params::{FilterSpec, PipelineSpec, RedirectTarget, WidgetParams};
pub use preset::{Preset, PresetOverlay};
pub use resolve::{merge_props, ResolvedConfig};
pub use tracking::{Tracking, TrackingInput};
