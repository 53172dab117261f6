//! Tuning panel for the studio variant.
//!
//! One row per parameter, in declaration order. Every edit goes through
//! `Scene::set_param`; a rejected edit puts the control back to the stored
//! value.

use crate::constants::{
    CAMERA_KIND_PARAM, FOV_PARAM, HIDDEN_CLASS, PANEL_CLASS, PANEL_ID, PANEL_ROW_CLASS, PARAM_ATTR,
    RANGE_FALLBACK_STEPS,
};
use crate::controls::{display_value, ControlSpec};
use crate::dom;
use crate::events::EventListeners;
use orb_core::camera::ORTHOGRAPHIC_CAMERA;
use orb_core::params::ListenerId;
use orb_core::{ParamValue, Parameter, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
enum ControlEl {
    Input(web::HtmlInputElement),
    Select(web::HtmlSelectElement),
}

impl ControlEl {
    fn value(&self) -> String {
        match self {
            ControlEl::Input(el) => el.value(),
            ControlEl::Select(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            ControlEl::Input(el) => el.set_value(value),
            ControlEl::Select(el) => el.set_value(value),
        }
    }

    fn event_target(&self) -> &web::EventTarget {
        match self {
            ControlEl::Input(el) => el.as_ref(),
            ControlEl::Select(el) => el.as_ref(),
        }
    }

    fn element(&self) -> &web::Element {
        match self {
            ControlEl::Input(el) => el.as_ref(),
            ControlEl::Select(el) => el.as_ref(),
        }
    }
}

pub struct Panel {
    root: web::HtmlElement,
    listeners: EventListeners,
    camera_listener: Option<ListenerId>,
}

impl Panel {
    pub fn build(document: &web::Document, scene: &Rc<RefCell<Scene>>) -> anyhow::Result<Self> {
        let container: web::Node = match document.get_element_by_id(PANEL_ID) {
            Some(el) => el.into(),
            None => document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?
                .into(),
        };
        let root: web::HtmlElement = dom::create_element(document, "div")?;
        root.set_class_name(PANEL_CLASS);

        let params: Vec<Parameter> = scene.borrow().store().iter().cloned().collect();
        let mut listeners = EventListeners::new();
        let mut fov_row = None;
        for param in &params {
            let row = build_row(document, param, scene, &mut listeners)?;
            dom::append(root.as_ref(), row.as_ref())?;
            if param.name == FOV_PARAM {
                fov_row = Some(row);
            }
        }
        dom::append(&container, root.as_ref())?;

        let camera_listener = match fov_row {
            Some(row) => {
                let kind = scene.borrow().store().text(CAMERA_KIND_PARAM).map(str::to_owned);
                dom::set_hidden(&row, HIDDEN_CLASS, kind.as_deref() == Some(ORTHOGRAPHIC_CAMERA));
                let id = scene.borrow_mut().on_change(
                    CAMERA_KIND_PARAM,
                    Box::new(move |v: &ParamValue| {
                        let ortho = v.as_str() == Some(ORTHOGRAPHIC_CAMERA);
                        dom::set_hidden(&row, HIDDEN_CLASS, ortho);
                    }),
                )?;
                Some(id)
            }
            None => None,
        };

        log::info!("[panel] {} controls", params.len());
        Ok(Self {
            root,
            listeners,
            camera_listener,
        })
    }

    pub fn remove(mut self, scene: &mut Scene) {
        self.listeners.clear();
        if let Some(id) = self.camera_listener.take() {
            scene.remove_listener(id);
        }
        self.root.remove();
    }
}

fn build_row(
    document: &web::Document,
    param: &Parameter,
    scene: &Rc<RefCell<Scene>>,
    listeners: &mut EventListeners,
) -> anyhow::Result<web::Element> {
    let row: web::HtmlElement = dom::create_element(document, "div")?;
    row.set_class_name(PANEL_ROW_CLASS);
    let label: web::HtmlElement = dom::create_element(document, "label")?;
    label.set_text_content(Some(&param.name));
    dom::append(row.as_ref(), label.as_ref())?;

    let spec = ControlSpec::for_parameter(param, RANGE_FALLBACK_STEPS);
    let control = build_control(document, &spec)?;
    control.set_value(&display_value(&param.value));
    _ = control.element().set_attribute(PARAM_ATTR, &param.name);
    dom::append(row.as_ref(), control.element().as_ref())?;

    let event = match spec {
        ControlSpec::Select(_) => "change",
        _ => "input",
    };
    let name = param.name.clone();
    let scene = scene.clone();
    let el = control.clone();
    listeners.add(control.event_target(), event, move |_ev| {
        let raw = el.value();
        let mut scene = scene.borrow_mut();
        let accepted = match spec.parse(&raw) {
            Some(value) => scene.set_param(&name, value).is_ok(),
            None => {
                log::warn!("[panel] unreadable value {:?} for {}", raw, name);
                false
            }
        };
        if !accepted {
            if let Some(stored) = scene.store().get(&name) {
                el.set_value(&display_value(stored));
            }
        }
    });
    Ok(row.into())
}

fn build_control(document: &web::Document, spec: &ControlSpec) -> anyhow::Result<ControlEl> {
    if let ControlSpec::Select(choices) = spec {
        let select: web::HtmlSelectElement = dom::create_element(document, "select")?;
        for choice in choices.iter() {
            let option: web::HtmlOptionElement = dom::create_element(document, "option")?;
            option.set_value(choice);
            option.set_text(choice);
            dom::append(select.as_ref(), option.as_ref())?;
        }
        return Ok(ControlEl::Select(select));
    }
    let input: web::HtmlInputElement = dom::create_element(document, "input")?;
    if let Some(kind) = spec.input_type() {
        input.set_type(kind);
    }
    if let ControlSpec::Range { min, max, step } = spec {
        input.set_min(&min.to_string());
        input.set_max(&max.to_string());
        input.set_step(&step.to_string());
    }
    Ok(ControlEl::Input(input))
}
