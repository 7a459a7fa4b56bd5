use std::collections::HashMap;

use log::debug;

use crate::card::{Card, Operator, Wildcard};
use crate::expression::{BinaryOp, Expression};

/// Memoization cache for expressions over a card range
type ExprCache = HashMap<(usize, usize), Vec<Expression>>;

fn binary_op(card: &Card) -> Option<BinaryOp> {
    match card {
        Card::Operator(Operator::Add) => Some(BinaryOp::Add),
        Card::Operator(Operator::Sub) => Some(BinaryOp::Sub),
        Card::Operator(Operator::Div) => Some(BinaryOp::Div),
        Card::Wildcard(Wildcard::Multiply) => Some(BinaryOp::Mul),
        Card::Number { .. } | Card::Wildcard(Wildcard::Sqrt) => None,
    }
}

/// Enumerates every fully parenthesized expression a fixed card order can form
pub struct ExpressionBuilder<'a> {
    cards: &'a [Card],
    cache: ExprCache,
}

impl<'a> ExpressionBuilder<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            cache: HashMap::new(),
        }
    }

    /// All expressions using every card, in split order
    pub fn build(mut self) -> Vec<Expression> {
        let expressions = self.build_range(0, self.cards.len());
        debug!(
            "Built {} expressions from {} cards",
            expressions.len(),
            self.cards.len()
        );
        expressions
    }

    fn build_range(&mut self, start: usize, end: usize) -> Vec<Expression> {
        if start >= end || end > self.cards.len() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.get(&(start, end)) {
            return cached.clone();
        }

        let mut expressions = Vec::new();
        if end - start == 1 {
            if let Some(Card::Number { value, .. }) = self.cards.get(start) {
                expressions.push(Expression::Number(f64::from(*value)));
            }
        } else {
            for split in start + 1..end {
                self.add_operations_at(start, split, end, &mut expressions);
            }
        }

        self.cache.insert((start, end), expressions.clone());
        expressions
    }

    /// The card just before `split` is the pivot: a binary operator joins the
    /// cards on either side, a leading sqrt wraps everything after it.
    fn add_operations_at(
        &mut self,
        start: usize,
        split: usize,
        end: usize,
        expressions: &mut Vec<Expression>,
    ) {
        let pivot_idx = split - 1;
        let Some(pivot) = self.cards.get(pivot_idx).copied() else {
            return;
        };

        if let Some(op) = binary_op(&pivot)
            && pivot_idx > start
        {
            let left_exprs = self.build_range(start, pivot_idx);
            let right_exprs = self.build_range(split, end);
            for left in &left_exprs {
                for right in &right_exprs {
                    expressions.push(Expression::binary(op, left.clone(), right.clone()));
                }
            }
        }

        if pivot.is_sqrt() && pivot_idx == start {
            let right_exprs = self.build_range(split, end);
            expressions.extend(right_exprs.into_iter().map(Expression::sqrt));
        }
    }
}

/// Every expression the cards form in exactly this order
pub fn build_expressions(cards: &[Card]) -> Vec<Expression> {
    ExpressionBuilder::new(cards).build()
}
