//! Data view to view model mapping
//!
//! `visual_transform` is the heart of the visual: a pure function from the
//! host's update options and the parsed settings to a render-ready
//! [`ViewModel`]. Malformed or partial input never fails; it produces the
//! default "no measure" card instead.
//!
//! ```text
//! VisualUpdateOptions + VisualSettings
//!   ↓ geometry (padding, card size, font sizes)
//! default card ("(blank)" / "[No Measure Supplied]")
//!   ↓ measure column (role "measure", first match)
//! measure text + label + primary tooltip
//!   ↓ tooltip columns (role "tooltip", data-view order)
//! ViewModel
//! ```

use super::layout::{
    LayoutDefaults, BLANK_VALUE_TEXT, NO_MEASURE_LABEL_TEXT, TEXT_ANCHOR_CENTRE, VALUE_BASELINE_SHIFT,
};
use crate::format::{format_value, js_number};
use crate::models::{
    columns_with_role, first_column_with_role, Card, CardText, DataRole, DataView, DataViewValueColumn, Dimensions,
    HtmlAttribute, TooltipItem, ViewModel, VisualSettings, VisualUpdateOptions,
};

/// Map the update options and settings into a view model.
pub fn visual_transform(options: &VisualUpdateOptions, settings: &VisualSettings) -> ViewModel {
    visual_transform_with_layout(options, settings, &LayoutDefaults::default())
}

/// `visual_transform` with explicit layout defaults
pub fn visual_transform_with_layout(
    options: &VisualUpdateOptions,
    settings: &VisualSettings,
    layout: &LayoutDefaults,
) -> ViewModel {
    let mut view_model = default_view_model(options, settings, layout);

    let Some(columns) = options.data_view().and_then(DataView::value_columns) else {
        log::debug!("Data view is missing or incomplete; rendering default card");
        return view_model;
    };

    let Some(measure) = first_column_with_role(columns, DataRole::Measure) else {
        log::debug!("No column bound to the '{}' role; rendering default card", DataRole::Measure);
        return view_model;
    };

    if measure.values.is_empty() {
        log::debug!("Measure column '{}' has no rows; rendering default card", measure.source.display_name);
        return view_model;
    }

    let card = &mut view_model.card;
    let measure_text = format_first_value(measure);
    card.measure_value.text = measure_text.clone();
    card.measure_label.text = measure.source.display_name.clone();

    card.tooltips.push(TooltipItem {
        display_name: card.measure_label.text.clone(),
        value: measure_text,
        color: Some(settings.card.fill_colour.clone()),
    });
    card.tooltips.extend(
        columns_with_role(columns, DataRole::Tooltip)
            .into_iter()
            .map(|column| TooltipItem {
                display_name: column.source.display_name.clone(),
                value: format_first_value(column),
                color: None,
            }),
    );

    view_model
}

fn format_first_value(column: &DataViewValueColumn) -> String {
    format_value(column.first_value(), column.source.format.as_deref())
}

/// The minimum draw: geometry and styles without any measure data
fn default_view_model(options: &VisualUpdateOptions, settings: &VisualSettings, layout: &LayoutDefaults) -> ViewModel {
    let viewport = options.viewport;
    let padding = layout.padding;

    let value_font_size = layout.value_font_size(viewport.width, viewport.height);
    let card_dimensions = Dimensions {
        width: viewport.width - padding.left * 2.0,
        height: viewport.height - padding.top * 2.0,
    };

    let attributes = vec![
        HtmlAttribute::new("x", js_number(padding.left)),
        HtmlAttribute::new("y", js_number(padding.top)),
        HtmlAttribute::new("width", js_number(card_dimensions.width)),
        HtmlAttribute::new("height", js_number(card_dimensions.height)),
    ];

    let styles = vec![
        HtmlAttribute::new("fill", settings.card.fill_colour.clone()),
        HtmlAttribute::new("fill-opacity", layout.fill_opacity),
        HtmlAttribute::new("stroke", layout.stroke),
        HtmlAttribute::new("stroke-width", js_number(settings.card.stroke_width)),
    ];

    let measure_value = CardText {
        text: BLANK_VALUE_TEXT.to_string(),
        attributes: vec![
            HtmlAttribute::new("x", TEXT_ANCHOR_CENTRE),
            HtmlAttribute::new("y", TEXT_ANCHOR_CENTRE),
            HtmlAttribute::new("dy", VALUE_BASELINE_SHIFT),
            HtmlAttribute::new("text-anchor", "middle"),
        ],
        styles: vec![HtmlAttribute::new("font-size", js_number(value_font_size))],
    };

    let measure_label = CardText {
        text: NO_MEASURE_LABEL_TEXT.to_string(),
        attributes: vec![
            HtmlAttribute::new("x", TEXT_ANCHOR_CENTRE),
            HtmlAttribute::new("y", js_number(viewport.height / 2.0)),
            HtmlAttribute::new("dy", format!("{}px", js_number(layout.label_offset(value_font_size)))),
            HtmlAttribute::new("text-anchor", "middle"),
        ],
        styles: vec![HtmlAttribute::new(
            "font-size",
            format!("{}px", js_number(layout.label_font_size(value_font_size))),
        )],
    };

    ViewModel {
        settings: settings.clone(),
        dimensions: Dimensions {
            width: viewport.width,
            height: viewport.height,
        },
        card: Card {
            padding,
            dimensions: card_dimensions,
            attributes,
            styles,
            measure_value,
            measure_label,
            tooltips: Vec::new(),
        },
    }
}
