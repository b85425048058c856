//! In-process host implementation
//!
//! Stands in for a real rendering host: effect files are "compiled" by
//! reading their uniform declarations, uniform writes are recorded on the
//! effect, and draws are counted on the filter context. Used by the CLI and
//! by the tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use tracing::trace;

use crate::host::graphics::{Effect, Graphics, ParamHandle, Vec3};
use crate::host::source::{ColorFormat, FilterContext, RenderMode};

/// Value last written to a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Bool(bool),
    Float(f32),
    Vec3(Vec3),
}

/// A uniform declared by an effect file
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    pub name: String,
    pub type_name: String,
    pub value: Option<UniformValue>,
}

/// Observable state of one compiled effect
#[derive(Debug, Default)]
pub struct EffectState {
    pub uniforms: Vec<Uniform>,

    /// Total number of uniform writes
    pub writes: usize,

    pub destroyed: bool,
}

impl EffectState {
    /// Last value written to the named uniform
    pub fn value(&self, name: &str) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .find(|u| u.name == name)
            .and_then(|u| u.value)
    }

    /// All uniforms that have been written, by name
    pub fn values(&self) -> BTreeMap<String, UniformValue> {
        self.uniforms
            .iter()
            .filter_map(|u| u.value.map(|v| (u.name.clone(), v)))
            .collect()
    }
}

/// Parse uniform declarations out of effect source text
///
/// The source must define at least one technique to count as compiled.
pub fn parse_effect_source(source: &str) -> Result<Vec<Uniform>, String> {
    let mut uniforms = Vec::new();
    let mut has_technique = false;

    for (line_no, raw) in source.lines().enumerate() {
        let line = raw.split("//").next().unwrap_or("").trim();

        if line.starts_with("technique") {
            has_technique = true;
            continue;
        }

        let Some(rest) = line.strip_prefix("uniform ") else {
            continue;
        };

        let declaration = rest
            .split([';', '=', '<'])
            .next()
            .unwrap_or("")
            .trim();
        let mut parts = declaration.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(type_name), Some(name), None) => uniforms.push(Uniform {
                name: name.to_string(),
                type_name: type_name.to_string(),
                value: None,
            }),
            _ => return Err(format!("line {}: malformed uniform declaration", line_no + 1)),
        }
    }

    if !has_technique {
        return Err("no technique defined".to_string());
    }

    Ok(uniforms)
}

/// Effect program backed by an [`EffectState`]
pub struct HeadlessEffect {
    state: Rc<RefCell<EffectState>>,
}

impl HeadlessEffect {
    fn write(&mut self, param: ParamHandle, value: UniformValue) {
        let mut state = self.state.borrow_mut();
        if let Some(uniform) = state.uniforms.get_mut(param.index()) {
            uniform.value = Some(value);
        }
        state.writes += 1;
    }
}

impl Drop for HeadlessEffect {
    fn drop(&mut self) {
        self.state.borrow_mut().destroyed = true;
    }
}

impl Effect for HeadlessEffect {
    fn param_by_name(&self, name: &str) -> Option<ParamHandle> {
        self.state
            .borrow()
            .uniforms
            .iter()
            .position(|u| u.name == name)
            .map(ParamHandle::new)
    }

    fn set_int(&mut self, param: ParamHandle, value: i32) {
        self.write(param, UniformValue::Int(value));
    }

    fn set_bool(&mut self, param: ParamHandle, value: bool) {
        self.write(param, UniformValue::Bool(value));
    }

    fn set_float(&mut self, param: ParamHandle, value: f32) {
        self.write(param, UniformValue::Float(value));
    }

    fn set_vec3(&mut self, param: ParamHandle, value: Vec3) {
        self.write(param, UniformValue::Vec3(value));
    }
}

/// Graphics subsystem that compiles effects from disk
#[derive(Default)]
pub struct HeadlessGraphics {
    depth: Cell<usize>,
    enters: Cell<usize>,
    effects: RefCell<Vec<Rc<RefCell<EffectState>>>>,
    unscoped_destroys: Cell<usize>,
}

impl HeadlessGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the context is currently entered
    pub fn context_depth(&self) -> usize {
        self.depth.get()
    }

    /// How many times the context has been entered in total
    pub fn enter_count(&self) -> usize {
        self.enters.get()
    }

    /// Effects released while the context was not entered
    pub fn unscoped_destroys(&self) -> usize {
        self.unscoped_destroys.get()
    }

    /// Number of effects compiled so far
    pub fn effect_count(&self) -> usize {
        self.effects.borrow().len()
    }

    /// State of the most recently compiled effect
    pub fn last_effect(&self) -> Option<Rc<RefCell<EffectState>>> {
        self.effects.borrow().last().cloned()
    }
}

impl Graphics for HeadlessGraphics {
    fn enter(&self) {
        self.depth.set(self.depth.get() + 1);
        self.enters.set(self.enters.get() + 1);
    }

    fn leave(&self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }

    fn create_effect_from_file(&self, path: &Path) -> Result<Box<dyn Effect>, String> {
        if self.depth.get() == 0 {
            return Err("graphics context not entered".to_string());
        }

        let source = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        let uniforms = parse_effect_source(&source)?;
        trace!("Compiled {:?} with {} uniforms", path, uniforms.len());

        let state = Rc::new(RefCell::new(EffectState {
            uniforms,
            ..EffectState::default()
        }));
        self.effects.borrow_mut().push(Rc::clone(&state));
        Ok(Box::new(HeadlessEffect { state }))
    }

    fn destroy_effect(&self, effect: Box<dyn Effect>) {
        if self.depth.get() == 0 {
            self.unscoped_destroys.set(self.unscoped_destroys.get() + 1);
        }
        drop(effect);
    }
}

/// A draw issued through [`FilterContext::process_filter_end`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub width: u32,
    pub height: u32,
}

/// Filter context with a fixed-size upstream target
#[derive(Debug, Default)]
pub struct HeadlessSource {
    target: Option<(u32, u32)>,
    pub begins: usize,
    pub skipped: usize,
    pub last_request: Option<(ColorFormat, RenderMode)>,
    pub draws: Vec<DrawCall>,
}

impl HeadlessSource {
    /// Context whose upstream target has the given base size
    pub fn with_target(width: u32, height: u32) -> Self {
        Self {
            target: Some((width, height)),
            ..Self::default()
        }
    }

    /// Context with no upstream target
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: Option<(u32, u32)>) {
        self.target = target;
    }
}

impl FilterContext for HeadlessSource {
    fn target_base_size(&self) -> Option<(u32, u32)> {
        self.target
    }

    fn process_filter_begin(&mut self, format: ColorFormat, mode: RenderMode) -> bool {
        self.last_request = Some((format, mode));
        let ready = matches!(self.target, Some((w, h)) if w > 0 && h > 0);
        if ready {
            self.begins += 1;
        } else {
            self.skipped += 1;
        }
        ready
    }

    fn process_filter_end(&mut self, _effect: &dyn Effect, width: u32, height: u32) {
        self.draws.push(DrawCall { width, height });
    }
}
