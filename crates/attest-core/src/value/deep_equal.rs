use super::{Value, ValueKind};

/// Structural, type-sensitive equality over reflected values.
///
/// Values of different type identities are never equal, so `1_i32` and
/// `1.0_f64` differ even though a numeric conversion exists. Composite values
/// are compared element by element, key by key and field by field. An unset
/// slot is only equal to another unset slot, which makes a nil slice differ
/// from an empty one. Funcs, channels and opaque values compare by identity.
///
/// Channel identity is the address of the handle that was reflected, not of
/// the channel behind it. Two clones of one `Sender` are separate handles and
/// compare unequal even though `Sender::same_channel` holds for them. Errors
/// compare by [`Identity`](crate::Identity), so a wrapper error never equals
/// the error it wraps.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if a.type_name != b.type_name {
        return false;
    }

    match (&a.kind, &b.kind) {
        (ValueKind::Invalid, ValueKind::Invalid) => true,
        (ValueKind::Bool(x), ValueKind::Bool(y)) => x == y,
        (ValueKind::Int(x), ValueKind::Int(y)) => x == y,
        (ValueKind::Uint(x), ValueKind::Uint(y)) => x == y,
        (ValueKind::Float(x), ValueKind::Float(y)) => x == y,
        (ValueKind::Char(x), ValueKind::Char(y)) => x == y,
        (ValueKind::String(x), ValueKind::String(y)) => x == y,
        (ValueKind::Array(xs), ValueKind::Array(ys)) => seq_equal(xs, ys),
        (ValueKind::Slice(xs), ValueKind::Slice(ys)) => match (xs, ys) {
            (None, None) => true,
            (Some(xs), Some(ys)) => seq_equal(xs, ys),
            _ => false,
        },
        (ValueKind::Map(xs), ValueKind::Map(ys)) => match (xs, ys) {
            (None, None) => true,
            (Some(xs), Some(ys)) => map_equal(xs, ys),
            _ => false,
        },
        (ValueKind::Ptr(x), ValueKind::Ptr(y)) | (ValueKind::Interface(x), ValueKind::Interface(y)) => {
            match (x, y) {
                (None, None) => true,
                (Some(x), Some(y)) => deep_equal(x, y),
                _ => false,
            }
        }
        (ValueKind::Func(x), ValueKind::Func(y)) => x == y,
        (ValueKind::Chan(x), ValueKind::Chan(y)) => x.map(|s| s.id) == y.map(|s| s.id),
        (ValueKind::Struct(xs), ValueKind::Struct(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|(x, y)| x.name == y.name && deep_equal(&x.value, &y.value))
        }
        (ValueKind::Opaque { id: x, .. }, ValueKind::Opaque { id: y, .. }) => x == y,
        _ => false,
    }
}

fn seq_equal(xs: &[Value], ys: &[Value]) -> bool {
    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
}

fn map_equal(xs: &[(Value, Value)], ys: &[(Value, Value)]) -> bool {
    xs.len() == ys.len()
        && xs.iter().all(|(key, value)| {
            ys.iter()
                .find(|(other, _)| deep_equal(key, other))
                .is_some_and(|(_, other)| deep_equal(value, other))
        })
}
