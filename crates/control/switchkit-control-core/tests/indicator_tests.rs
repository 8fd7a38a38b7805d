use switchkit_control_core::{
    ids::LayerIdAllocator,
    indicator::{ExchangeIndicator, SHAPE_OFF_KEY, SHAPE_ON_KEY},
    keyframe::{AnimatedProperty, FillPolicy, LayerAnimation},
    layer::LayerPath,
    outputs::{Outputs, RenderCommand},
    timing::TimingCurve,
    Color, Rect, Value, Vec2,
};

fn indicator(frame: Rect) -> ExchangeIndicator {
    let mut ids = LayerIdAllocator::new();
    ExchangeIndicator::new(frame, &mut ids)
}

fn keyframe_for(out: &Outputs, key: &str) -> switchkit_control_core::KeyframeAnimation {
    out.commands
        .iter()
        .find_map(|c| match c {
            RenderCommand::AddAnimation {
                key: k,
                animation: LayerAnimation::Keyframe(anim),
                ..
            } if k == key => Some(anim.clone()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no keyframe animation keyed '{key}'"))
}

/// it should start with the on shape visible and the off shape collapsed
#[test]
fn initial_scales_read_as_on() {
    let ind = indicator(Rect::new(10.0, 10.0, 80.0, 80.0));
    assert_eq!(ind.off_layer().transform_scale, Vec2::splat(0.0));
    assert_eq!(ind.on_layer().transform_scale, Vec2::splat(1.0));
    assert_eq!(ind.frame(), Rect::new(10.0, 10.0, 80.0, 80.0));
}

/// it should size both circle shapes to the shorter side of the frame
#[test]
fn circles_fit_the_shorter_side() {
    let ind = indicator(Rect::new(0.0, 0.0, 60.0, 30.0));
    let circle = Rect::new(0.0, 0.0, 30.0, 30.0);
    for shape in [ind.on_layer(), ind.off_layer()] {
        assert_eq!(shape.frame, circle);
        assert_eq!(shape.path, Some(LayerPath::Oval { rect: circle }));
    }
}

/// it should parent both circle shapes to the container layer
#[test]
fn circles_are_children_of_the_container() {
    let ind = indicator(Rect::new(0.0, 0.0, 40.0, 40.0));
    assert_eq!(ind.on_layer().parent, Some(ind.id()));
    assert_eq!(ind.off_layer().parent, Some(ind.id()));
}

/// it should refit circle paths when laid out to a new frame
#[test]
fn layout_refits_circles() {
    let mut ind = indicator(Rect::new(0.0, 0.0, 40.0, 40.0));
    ind.layout(Rect::new(5.0, 5.0, 90.0, 90.0));
    let circle = Rect::new(0.0, 0.0, 90.0, 90.0);
    assert_eq!(ind.on_layer().frame, circle);
    assert_eq!(ind.off_layer().path, Some(LayerPath::Oval { rect: circle }));
    assert_eq!(ind.frame().origin, Vec2::new(5.0, 5.0));
}

/// it should emit the container first and the off shape before the on shape
#[test]
fn emit_orders_on_shape_last() {
    let mut ind = indicator(Rect::new(0.0, 0.0, 40.0, 40.0));
    ind.apply_colors(Color::rgb(0.0, 1.0, 0.0), Color::white(0.9));
    let mut out = Outputs::default();
    ind.emit(&mut out);

    let ids: Vec<_> = out
        .commands
        .iter()
        .map(|c| match c {
            RenderCommand::UpsertLayer { layer } => layer.id,
            other => panic!("unexpected command {other:?}"),
        })
        .collect();
    assert_eq!(
        ids,
        vec![ind.id(), ind.off_layer().id, ind.on_layer().id]
    );
}

/// it should grow the revealed shape with ease-in and shrink the hidden one
/// with ease-out, both held for the full duration
#[test]
fn exchange_to_off_cross_scales() {
    let mut ind = indicator(Rect::new(0.0, 0.0, 80.0, 80.0));
    let mut out = Outputs::default();
    ind.exchange_animate(false, 0.4, &mut out);

    let reveal = keyframe_for(&out, SHAPE_OFF_KEY);
    assert_eq!(reveal.property, AnimatedProperty::TransformScale);
    assert_eq!(reveal.values, vec![Value::zero_scale(), Value::identity_scale()]);
    assert_eq!(reveal.key_times, vec![0.0, 1.0]);
    assert_eq!(reveal.timing, TimingCurve::EASE_IN);
    assert_eq!(reveal.fill, FillPolicy::Hold);
    assert_eq!(reveal.duration, 0.4);

    let conceal = keyframe_for(&out, SHAPE_ON_KEY);
    assert_eq!(conceal.values, vec![Value::identity_scale(), Value::zero_scale()]);
    assert_eq!(conceal.timing, TimingCurve::EASE_OUT);
    assert_eq!(conceal.fill, FillPolicy::Hold);

    assert!(ind.off_layer().z_position > ind.on_layer().z_position);
}

/// it should mirror the choreography when exchanging back to on
#[test]
fn exchange_to_on_mirrors() {
    let mut ind = indicator(Rect::new(0.0, 0.0, 80.0, 80.0));
    let mut out = Outputs::default();
    ind.exchange_animate(false, 0.4, &mut out);
    out.clear();
    ind.exchange_animate(true, 0.4, &mut out);

    let reveal = keyframe_for(&out, SHAPE_ON_KEY);
    assert_eq!(reveal.values, vec![Value::zero_scale(), Value::identity_scale()]);
    assert_eq!(reveal.timing, TimingCurve::EASE_IN);

    let conceal = keyframe_for(&out, SHAPE_OFF_KEY);
    assert_eq!(conceal.values, vec![Value::identity_scale(), Value::zero_scale()]);
    assert_eq!(conceal.timing, TimingCurve::EASE_OUT);

    assert!(ind.on_layer().z_position > ind.off_layer().z_position);
}

/// it should apply the configured fill colors to the matching shapes
#[test]
fn colors_land_on_their_shapes() {
    let mut ind = indicator(Rect::new(0.0, 0.0, 40.0, 40.0));
    let on = Color::rgb(0.34, 0.91, 0.51);
    let off = Color::rgb(0.90, 0.90, 0.90);
    ind.apply_colors(on, off);
    assert_eq!(ind.on_layer().fill_color, Some(on));
    assert_eq!(ind.off_layer().fill_color, Some(off));
}
