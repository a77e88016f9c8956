use serde_json::Value;

/// A value that can be absent, zero-length, whitespace-only or falsy.
///
/// `Str::empty` is defined over this trait so that strings, options, numbers,
/// sequences and decoded JSON all answer the same question the same way.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

macro_rules! impl_blank_for_int {
    ($($ty:ty),*) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_blank_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Blank for f32 {
    fn is_blank(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

impl Blank for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

// Sequences only count as blank when they hold nothing; `[" "]` is not blank.
impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => b.is_blank(),
            Value::Number(n) => n.as_f64().is_none_or(|f| f.is_blank()),
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Object(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings() {
        assert!("".is_blank());
        assert!(" \t\n ".is_blank());
        assert!(!" a ".is_blank());
        assert!(String::new().is_blank());
    }

    #[test]
    fn test_options() {
        assert!(None::<&str>.is_blank());
        assert!(Some("  ").is_blank());
        assert!(!Some("x").is_blank());
    }

    #[test]
    fn test_scalars() {
        assert!(false.is_blank());
        assert!(!true.is_blank());
        assert!(0i32.is_blank());
        assert!(!7u8.is_blank());
        assert!(f64::NAN.is_blank());
        assert!(0.0f32.is_blank());
    }

    #[test]
    fn test_sequences() {
        assert!(Vec::<i32>::new().is_blank());
        assert!(!vec![1].is_blank());
        assert!(!vec![" "].is_blank());
        assert!(!(&[0][..]).is_blank());
    }

    #[test]
    fn test_json_values() {
        assert!(Value::Null.is_blank());
        assert!(json!(false).is_blank());
        assert!(json!(0).is_blank());
        assert!(json!("   ").is_blank());
        assert!(json!([]).is_blank());
        assert!(!json!({}).is_blank());
        assert!(!json!([1]).is_blank());
        assert!(!json!(-3).is_blank());
    }
}
