// Host-side tests for the uniform binder and the packed uniform layout.

use orb_core::params::{ParamValue, ParameterStore};
use orb_core::uniforms::{
    coerce_easing, coerce_number, default_slots, ShaderUniforms, UniformBinder, UniformBlock,
    UniformSlot, UniformValue, U_COLOR1, U_COLOR2, U_EASING, U_LINE_COUNT, U_ORDER, U_RADIUS,
    U_TIME,
};
use orb_core::ValidationError;
use std::cell::RefCell;
use std::rc::Rc;

fn bound() -> (ParameterStore, UniformBinder, Rc<RefCell<UniformBlock>>) {
    let mut store = ParameterStore::with_defaults();
    let block = Rc::new(RefCell::new(UniformBlock::new()));
    let mut binder = UniformBinder::new(block.clone());
    binder.bind(&mut store, default_slots()).expect("default slots bind");
    (store, binder, block)
}

fn approx3(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
}

#[test]
fn bind_pushes_current_values_immediately() {
    let (_store, binder, block) = bound();
    assert_eq!(binder.binding_count(), default_slots().len());
    let b = block.borrow();
    assert_eq!(b.get(U_ORDER), Some(UniformValue::Float(2.0)));
    assert_eq!(b.get(U_LINE_COUNT), Some(UniformValue::Float(23.0)));
    assert_eq!(b.get(U_EASING), Some(UniformValue::Int(0)));
    match b.get(U_COLOR1) {
        Some(UniformValue::Vec3(c)) => {
            assert!(approx3(c, [248.0 / 255.0, 246.0 / 255.0, 243.0 / 255.0]), "{c:?}")
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(b.get(U_COLOR2), Some(UniformValue::Vec3([0.0, 0.0, 0.0])));
}

#[test]
fn accepted_writes_reach_the_block() {
    let (mut store, _binder, block) = bound();
    store.set("order", ParamValue::Number(5.0)).unwrap();
    store.set("easing", ParamValue::Choice("sineIn".into())).unwrap();
    store.set("color2", ParamValue::Color("#ff0000".into())).unwrap();
    let b = block.borrow();
    assert_eq!(b.get(U_ORDER), Some(UniformValue::Float(5.0)));
    assert_eq!(b.get(U_EASING), Some(UniformValue::Int(4)));
    assert_eq!(b.get(U_COLOR2), Some(UniformValue::Vec3([1.0, 0.0, 0.0])));
}

#[test]
fn rejected_writes_leave_the_block_alone() {
    let (mut store, _binder, block) = bound();
    let writes = block.borrow().writes();
    assert!(store.set("radius", ParamValue::Number(50.0)).is_err());
    assert_eq!(block.borrow().writes(), writes);
    assert_eq!(block.borrow().get(U_RADIUS), Some(UniformValue::Float(0.8)));
}

#[test]
fn every_slot_follows_its_parameter() {
    let (mut store, binder, block) = bound();
    for slot in binder.slots().to_vec() {
        let value = match store.get(slot.source).cloned() {
            Some(ParamValue::Number(_)) => {
                let p = store.parameter(slot.source).expect("declared");
                match p.domain {
                    orb_core::Domain::Range { max, .. } => ParamValue::Number(max),
                    _ => unreachable!(),
                }
            }
            Some(ParamValue::Color(_)) => ParamValue::Color("#336699".into()),
            Some(ParamValue::Choice(_)) => ParamValue::Choice("sineIn".into()),
            None => panic!("slot {} has no parameter", slot.source),
        };
        store.set(slot.source, value.clone()).unwrap();
        let expected = (slot.coerce)(&value).expect("coercible");
        assert_eq!(block.borrow().get(slot.uniform), Some(expected), "{}", slot.uniform);
    }
}

#[test]
fn unknown_easing_names_use_the_fallback_code() {
    assert_eq!(
        coerce_easing(&ParamValue::Choice("bounce".into())),
        Some(UniformValue::Int(1))
    );
    assert_eq!(coerce_easing(&ParamValue::Number(1.0)), None);
}

#[test]
fn rebinding_never_duplicates_listeners() {
    let (mut store, mut binder, block) = bound();
    binder.rebind(&mut store, default_slots()).unwrap();
    binder.rebind(&mut store, default_slots()).unwrap();
    for slot in default_slots() {
        assert_eq!(store.listener_count(slot.source), 1, "{}", slot.source);
    }
    let before = block.borrow().writes();
    store.set("order", ParamValue::Number(7.0)).unwrap();
    assert_eq!(block.borrow().writes(), before + 1);
}

#[test]
fn rebinding_with_fewer_slots_drops_the_rest() {
    let (mut store, mut binder, block) = bound();
    binder
        .rebind(&mut store, vec![UniformSlot::new(U_ORDER, "order", coerce_number)])
        .unwrap();
    assert_eq!(binder.binding_count(), 1);
    assert_eq!(store.listener_count("degree"), 0);
    store.set("radius", ParamValue::Number(3.0)).unwrap();
    assert_eq!(block.borrow().get(U_RADIUS), Some(UniformValue::Float(0.8)));
}

#[test]
fn binding_an_unknown_source_fails_cleanly() {
    let mut store = ParameterStore::with_defaults();
    let block = Rc::new(RefCell::new(UniformBlock::new()));
    let mut binder = UniformBinder::new(block);
    let slots = vec![
        UniformSlot::new(U_ORDER, "order", coerce_number),
        UniformSlot::new("uGhost", "ghost", coerce_number),
    ];
    assert_eq!(
        binder.bind(&mut store, slots),
        Err(ValidationError::UnknownParameter("ghost".into()))
    );
    assert_eq!(binder.binding_count(), 0);
    assert_eq!(store.listener_count("order"), 0);
}

#[test]
fn retarget_moves_updates_to_the_new_block() {
    let (mut store, mut binder, old) = bound();
    let fresh = Rc::new(RefCell::new(UniformBlock::new()));
    binder.retarget(&mut store, fresh.clone()).unwrap();
    assert_eq!(fresh.borrow().get(U_ORDER), Some(UniformValue::Float(2.0)));

    store.set("order", ParamValue::Number(9.0)).unwrap();
    assert_eq!(fresh.borrow().get(U_ORDER), Some(UniformValue::Float(9.0)));
    assert_eq!(old.borrow().get(U_ORDER), Some(UniformValue::Float(2.0)));
    assert_eq!(store.listener_count("order"), 1);
}

#[test]
fn unbind_removes_every_listener() {
    let (mut store, mut binder, _block) = bound();
    binder.unbind(&mut store);
    assert_eq!(binder.binding_count(), 0);
    for slot in default_slots() {
        assert_eq!(store.listener_count(slot.source), 0);
    }
}

#[test]
fn packed_layout_matches_the_shader() {
    assert_eq!(std::mem::size_of::<ShaderUniforms>(), 160);
    assert_eq!(std::mem::size_of::<ShaderUniforms>() % 16, 0);

    let (_store, _binder, block) = bound();
    block.borrow_mut().set(U_TIME, UniformValue::Float(0.5));
    let u = block.borrow().pack(glam::Mat4::IDENTITY);
    assert_eq!(u.time, 0.5);
    assert_eq!(u.order, 2.0);
    assert_eq!(u.line_multiplier, 15.0);
    assert_eq!(u.easing, 0);
    assert_eq!(u.color2, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(u.color1[3], 1.0);
    assert_eq!(u.resolution, [1.0, 1.0]);
    assert_eq!(u.view_proj, glam::Mat4::IDENTITY.to_cols_array_2d());
    assert_eq!(bytemuck::bytes_of(&u).len(), 160);
}
