//! The card visual's update cycle
//!
//! `CardVisual` is the state a visual instance carries between host
//! updates: the last parsed settings, the in-memory scene and the tooltip
//! binding. Each `update` overwrites all three from the new options; no
//! view model is kept.

use std::cell::RefCell;
use std::rc::Rc;

use crate::converters::visual_transform;
use crate::error::VisualResult;
use crate::models::{TooltipItem, ViewModel, VisualObjectInstance, VisualSettings, VisualUpdateOptions};
use crate::renderers::{SvgScene, TooltipBinding};

#[derive(Debug)]
pub struct CardVisual {
    settings: VisualSettings,
    scene: SvgScene,
    tooltip: Rc<RefCell<TooltipBinding>>,
}

impl Default for CardVisual {
    fn default() -> Self {
        Self::new()
    }
}

impl CardVisual {
    pub fn new() -> Self {
        Self {
            settings: VisualSettings::default(),
            scene: SvgScene::new(),
            tooltip: Rc::new(RefCell::new(TooltipBinding::new())),
        }
    }

    /// Run one update: parse settings, map the view model, render it to the
    /// scene and refresh the tooltip list. The view model is returned so
    /// other renderers can apply the same cycle.
    pub fn update(&mut self, options: &VisualUpdateOptions) -> VisualResult<ViewModel> {
        self.settings = VisualSettings::parse(options.data_view());

        let view_model = visual_transform(options, &self.settings);
        log::debug!("View Model: {:?}", view_model);

        self.scene.update(&view_model)?;
        self.tooltip.borrow_mut().update(&view_model.card.tooltips);

        Ok(view_model)
    }

    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }

    pub fn scene(&self) -> &SvgScene {
        &self.scene
    }

    /// Property pane entries for `object_name`, from the last parsed settings
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        self.settings.enumerate_object_instances(object_name)
    }

    pub fn tooltip_items(&self) -> Vec<TooltipItem> {
        self.tooltip.borrow().items().to_vec()
    }

    /// Shared handle for hover listeners
    pub fn tooltip_binding(&self) -> Rc<RefCell<TooltipBinding>> {
        Rc::clone(&self.tooltip)
    }
}
