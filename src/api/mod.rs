mod axis_scene_builder;
mod composer;
mod composer_config;
mod legend_layout;
mod legend_style;
mod rebuild_pass;
mod series_input;
mod series_scene_builder;
mod snapshot;

pub use axis_scene_builder::{
    AXIS_LABEL_FONT_PX, AXIS_TICK_LABEL_GAP_PX, AXIS_TICK_MARK_PX, GRIDLINE_DASH_PX, axis_origin,
    axis_shapes,
};
pub use composer::{ChartComposer, SceneElement};
pub use composer_config::{AxisOptions, CanvasStyle, ComposerConfig, DEFAULT_CHART_MARGIN};
pub use legend_layout::{
    DEFAULT_LEGEND_INSIDE_MARGIN, HorizontalAnchor, LEGEND_ITEM_SPACING_PX, LEGEND_LABEL_FONT_PX,
    LegendCorner, LegendFlow, LegendLayout, LegendPlacement, LegendShape,
    OUTSIDE_LEGEND_BOTTOM_GAP_PX, OUTSIDE_LEGEND_MARGIN_PX, VerticalAnchor, Y_AXIS_GUTTER_PX,
};
pub use legend_style::LegendStyle;
pub use rebuild_pass::{LayoutContext, TITLE_FONT_PX};
pub use series_input::{SeriesData, SeriesId, SeriesInput, SeriesSource, XyRecord};
pub use series_scene_builder::{equilateral_triangle, marker_shape};
pub use snapshot::{
    AxisSnapshot, LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1,
    LegendSnapshot, SeriesSnapshot,
};
