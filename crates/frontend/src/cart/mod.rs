pub mod api;
pub mod ui;

/// What a quantity update actually means: dropping to zero or below is a
/// removal, never a zero-quantity line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartQuantityOp {
    Remove,
    Update(i64),
}

impl CartQuantityOp {
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            Self::Remove
        } else {
            Self::Update(quantity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_negative_quantity_is_a_removal() {
        assert_eq!(CartQuantityOp::for_quantity(0), CartQuantityOp::Remove);
        assert_eq!(CartQuantityOp::for_quantity(-3), CartQuantityOp::Remove);
    }

    #[test]
    fn positive_quantity_is_an_update() {
        assert_eq!(CartQuantityOp::for_quantity(1), CartQuantityOp::Update(1));
        assert_eq!(CartQuantityOp::for_quantity(7), CartQuantityOp::Update(7));
    }
}
