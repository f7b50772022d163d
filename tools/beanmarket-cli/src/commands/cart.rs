//! Scripted cart sessions.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use beanmarket_commerce::cart::{CartEvent, CartSummary};
use beanmarket_commerce::{CommerceError, ItemId, Storefront};
use serde::Serialize;
use thiserror::Error;

use super::CartArgs;
use crate::context::Context;

/// One cart action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add(ItemId),
    Remove(ItemId),
    SetQuantity(ItemId, i64),
    Increment(ItemId),
    Decrement(ItemId),
    Clear,
}

/// A cart operation string that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpParseError {
    #[error("unknown cart operation '{0}' (expected add, remove, qty, inc, dec or clear)")]
    UnknownOp(String),
    #[error("cart operation '{0}' needs an item id")]
    MissingId(String),
    #[error("expected qty:<id>=<n>, got '{0}'")]
    BadQuantity(String),
}

impl FromStr for CartOp {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (op, arg) = match s.split_once(':') {
            Some((op, arg)) => (op, arg.trim()),
            None => (s, ""),
        };

        let id = || {
            if arg.is_empty() {
                Err(OpParseError::MissingId(s.to_string()))
            } else {
                Ok(ItemId::new(arg))
            }
        };

        match op.to_lowercase().as_str() {
            "add" => Ok(CartOp::Add(id()?)),
            "remove" | "rm" => Ok(CartOp::Remove(id()?)),
            "inc" => Ok(CartOp::Increment(id()?)),
            "dec" => Ok(CartOp::Decrement(id()?)),
            "clear" if arg.is_empty() => Ok(CartOp::Clear),
            "qty" => {
                let (item, quantity) = arg
                    .split_once('=')
                    .ok_or_else(|| OpParseError::BadQuantity(s.to_string()))?;
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| OpParseError::BadQuantity(s.to_string()))?;
                if item.trim().is_empty() {
                    return Err(OpParseError::MissingId(s.to_string()));
                }
                Ok(CartOp::SetQuantity(ItemId::new(item.trim()), quantity))
            }
            _ => Err(OpParseError::UnknownOp(s.to_string())),
        }
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add:{}", id),
            CartOp::Remove(id) => write!(f, "remove:{}", id),
            CartOp::SetQuantity(id, n) => write!(f, "qty:{}={}", id, n),
            CartOp::Increment(id) => write!(f, "inc:{}", id),
            CartOp::Decrement(id) => write!(f, "dec:{}", id),
            CartOp::Clear => write!(f, "clear"),
        }
    }
}

impl CartOp {
    /// Apply to a storefront. Resulting events are left in the storefront's
    /// pending buffer.
    pub fn apply(&self, store: &mut Storefront) -> Result<(), CommerceError> {
        match self {
            CartOp::Add(id) => {
                store.add_to_cart(id)?;
            }
            CartOp::Remove(id) => {
                store.remove_from_cart(id);
            }
            CartOp::SetQuantity(id, n) => {
                store.set_quantity(id, *n);
            }
            CartOp::Increment(id) => {
                store.increment(id);
            }
            CartOp::Decrement(id) => {
                store.decrement(id);
            }
            CartOp::Clear => {
                store.clear_cart();
            }
        }
        Ok(())
    }
}

/// What one operation did: the events it produced, or why it was refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpOutcome {
    pub op: String,
    pub events: Vec<CartEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OpOutcome {
    /// Whether the operation was refused.
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// A finished scripted run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartRun {
    pub ops: Vec<OpOutcome>,
    pub cart: CartSummary,
}

impl CartRun {
    /// Number of refused operations.
    pub fn rejected(&self) -> usize {
        self.ops.iter().filter(|outcome| outcome.is_rejected()).count()
    }
}

/// Apply `ops` in order. A refused operation is recorded and the script continues.
pub fn run_script(store: &mut Storefront, ops: &[CartOp]) -> CartRun {
    let ops = ops
        .iter()
        .map(|op| {
            let error = op.apply(store).err().map(|e| e.to_string());
            OpOutcome {
                op: op.to_string(),
                events: store.drain_events(),
                error,
            }
        })
        .collect();

    CartRun {
        ops,
        cart: store.cart_summary(),
    }
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_storefront()?;
    let run = run_script(&mut store, &args.ops);

    if ctx.output.is_json() {
        ctx.output.json(&run);
    } else {
        for outcome in &run.ops {
            match outcome.error {
                Some(ref error) => ctx.output.warn(&format!("{}: {}", outcome.op, error)),
                None if outcome.events.is_empty() => ctx
                    .output
                    .debug(&format!("{}: nothing to change", outcome.op)),
                None => outcome.events.iter().for_each(|event| ctx.output.event(event)),
            }
        }

        ctx.output.header("Cart");
        ctx.output.cart(&run.cart);
    }

    let report = store.close();
    ctx.output.debug(&format!("session {} closed", report.session_id));

    if run.rejected() > 0 {
        bail!("{} of {} cart operation(s) were rejected", run.rejected(), run.ops.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanmarket_commerce::catalog::sample_catalog;
    use beanmarket_commerce::{Money, SessionContext};

    fn parse(s: &str) -> Result<CartOp, OpParseError> {
        s.parse()
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!(parse("add:1").unwrap(), CartOp::Add(ItemId::new("1")));
        assert_eq!(parse("RM:4").unwrap(), CartOp::Remove(ItemId::new("4")));
        assert_eq!(
            parse("qty:2=3").unwrap(),
            CartOp::SetQuantity(ItemId::new("2"), 3)
        );
        assert_eq!(
            parse("qty:2=-1").unwrap(),
            CartOp::SetQuantity(ItemId::new("2"), -1)
        );
        assert_eq!(parse("inc:5").unwrap(), CartOp::Increment(ItemId::new("5")));
        assert_eq!(parse("dec:5").unwrap(), CartOp::Decrement(ItemId::new("5")));
        assert_eq!(parse("clear").unwrap(), CartOp::Clear);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("buy:1"), Err(OpParseError::UnknownOp(_))));
        assert!(matches!(parse("add"), Err(OpParseError::MissingId(_))));
        assert!(matches!(parse("add:"), Err(OpParseError::MissingId(_))));
        assert!(matches!(parse("qty:2"), Err(OpParseError::BadQuantity(_))));
        assert!(matches!(parse("qty:2=x"), Err(OpParseError::BadQuantity(_))));
        assert!(matches!(parse("qty:=2"), Err(OpParseError::MissingId(_))));
    }

    #[test]
    fn test_display_round_trips() {
        for op in ["add:1", "remove:2", "qty:3=4", "inc:5", "dec:6", "clear"] {
            assert_eq!(parse(op).unwrap().to_string(), op);
        }
    }

    fn script(ops: &[&str]) -> Vec<CartOp> {
        ops.iter().map(|op| parse(op).unwrap()).collect()
    }

    #[test]
    fn test_apply_script() {
        let mut store = Storefront::open(SessionContext::buyer(), sample_catalog()).unwrap();
        let run = run_script(
            &mut store,
            &script(&["add:1", "add:2", "add:2", "qty:9=3", "add:3", "dec:1"]),
        );

        assert!(run.ops[3].events.is_empty());
        assert!(run.ops[3].error.is_none());
        assert_eq!(
            run.ops[4].error.as_deref(),
            Some(CommerceError::OutOfStock("3".to_string()).to_string().as_str())
        );
        assert_eq!(run.ops[5].events[0].kind(), "removed");
        assert_eq!(run.rejected(), 1);
        assert_eq!(run.cart.item_count, 2);
        assert_eq!(run.cart.total, Money::usd(4500));
        assert_eq!(store.cart().total_price(), Money::usd(4500));
    }

    #[test]
    fn test_mixed_script_json_keeps_notifications_and_rejections() {
        let mut store = Storefront::open(SessionContext::buyer(), sample_catalog()).unwrap();
        let run = run_script(&mut store, &script(&["add:1", "add:3", "add:42"]));
        let json = serde_json::to_value(&run).unwrap();

        let ops = json["ops"].as_array().unwrap();
        assert_eq!(ops.len(), 3);

        assert_eq!(ops[0]["op"], "add:1");
        assert_eq!(ops[0]["events"][0]["kind"], "added");
        assert!(ops[0].get("error").is_none());

        assert_eq!(ops[1]["op"], "add:3");
        assert!(ops[1]["events"].as_array().unwrap().is_empty());
        assert!(ops[1]["error"].as_str().unwrap().contains("out of stock"));

        assert_eq!(ops[2]["op"], "add:42");
        assert!(ops[2]["error"].as_str().unwrap().contains("not found"));

        assert_eq!(json["cart"]["item_count"], 1);
        assert_eq!(run.rejected(), 2);
    }
}
