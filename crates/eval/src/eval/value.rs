// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand value.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use hitcalc_cards::{Card, DuplicateCards, Rank, check_distinct, combos::KSubsets};

use super::HandCategory;

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have 5, 6, or 7 cards.
    #[error("invalid number of cards {0}, a hand must have 5 to 7 cards")]
    InvalidCardCount(usize),
    /// The hand has repeated cards.
    #[error(transparent)]
    DuplicateCard(#[from] DuplicateCards),
}

/// The value of the best five cards hand.
///
/// Values compare by category first and then by the tiebreak ranks, the ranks
/// ordered by count and then by value so that a full house tiebreak is the
/// three of a kind rank followed by the pair rank. Straights list their five
/// ranks from the top card, with the ace of a wheel counted as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    category: HandCategory,
    tiebreak: [u8; 5],
}

impl HandValue {
    /// Evaluates the best five cards hand out of 5, 6, or 7 cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        Self::eval_with_best_hand(cards).map(|(value, _)| value)
    }

    /// Evaluates the best five cards hand out of 5, 6, or 7 cards and returns
    /// its value with the five cards that make the hand.
    ///
    /// Every five cards subset is classified on its own, so a straight and a
    /// flush made from different cards never count as a straight flush.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(HandValue, [Card; 5]), EvalError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EvalError::InvalidCardCount(cards.len()));
        }

        check_distinct(cards)?;

        let mut best: Option<(HandValue, [Card; 5])> = None;
        for subset in KSubsets::new(cards.len(), 5) {
            let mut hand = [cards[0]; 5];
            for (card, &idx) in hand.iter_mut().zip(subset.indices()) {
                *card = cards[idx];
            }

            let value = eval5(&hand);
            if best.is_none_or(|(b, _)| value > b) {
                best = Some((value, hand));
            }
        }

        best.ok_or(EvalError::InvalidCardCount(cards.len()))
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The rank values used to break ties within the same category.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.category.tiebreak_len()]
    }

    /// Checks if this is an ace high straight flush.
    pub fn is_royal_flush(&self) -> bool {
        self.category == HandCategory::StraightFlush && self.tiebreak[0] == Rank::Ace.value()
    }

    /// The hand display name, a royal flush is a straight flush with an ace.
    pub fn label(&self) -> &'static str {
        if self.is_royal_flush() {
            "Royal Flush"
        } else {
            self.category.name()
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.label(), self.tiebreak())
    }
}

/// Classifies a five cards hand.
fn eval5(cards: &[Card; 5]) -> HandValue {
    let mut counts = [0u8; 15];
    let mut suits = 0u8;
    for card in cards {
        counts[card.rank().value() as usize] += 1;
        suits |= 1 << card.suit() as u8;
    }

    // (count, rank) for each rank in the hand, by count and then rank.
    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for rank in (2..=14u8).rev() {
        let count = counts[rank as usize];
        if count > 0 {
            groups[num_groups] = (count, rank);
            num_groups += 1;
        }
    }
    groups[..num_groups].sort_by(|a, b| b.cmp(a));

    let is_flush = suits.count_ones() == 1;
    let straight_high = if num_groups < 5 {
        None
    } else if groups[0].1 - groups[4].1 == 4 {
        Some(groups[0].1)
    } else if groups[0].1 == 14 && groups[1].1 == 5 {
        // A-5-4-3-2, the wheel plays as a five high straight.
        Some(5)
    } else {
        None
    };

    let category = match (straight_high, is_flush, groups[0].0, groups[1].0) {
        (Some(_), true, _, _) => HandCategory::StraightFlush,
        (_, _, 4, _) => HandCategory::FourOfAKind,
        (_, _, 3, 2) => HandCategory::FullHouse,
        (_, true, _, _) => HandCategory::Flush,
        (Some(_), _, _, _) => HandCategory::Straight,
        (_, _, 3, _) => HandCategory::ThreeOfAKind,
        (_, _, 2, 2) => HandCategory::TwoPair,
        (_, _, 2, _) => HandCategory::Pair,
        _ => HandCategory::HighCard,
    };

    let mut tiebreak = [0u8; 5];
    match straight_high {
        Some(high) => {
            for (idx, rank) in tiebreak.iter_mut().enumerate() {
                *rank = high - idx as u8;
            }
        }
        None => {
            for (rank, group) in tiebreak.iter_mut().zip(&groups[..num_groups]) {
                *rank = group.1;
            }
        }
    }

    HandValue { category, tiebreak }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hitcalc_cards::{Deck, parse_cards};
    use rand::prelude::*;

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn categories_precedence() {
        let hands = [
            ("AC 7D 4S 9H 3C", HandCategory::HighCard),
            ("KS KD 8C 5H 2S", HandCategory::Pair),
            ("QH QC JD JS 7C", HandCategory::TwoPair),
            ("TS TD TC 8H 3S", HandCategory::ThreeOfAKind),
            ("7C 8S 9D TH JC", HandCategory::Straight),
            ("2H 6H 9H JH KH", HandCategory::Flush),
            ("QC QD QS 8C 8H", HandCategory::FullHouse),
            ("JS JD JC JH 5C", HandCategory::FourOfAKind),
            ("8S 9S TS JS QS", HandCategory::StraightFlush),
        ];

        let values = hands
            .iter()
            .map(|(cards, category)| {
                let value = eval(cards);
                assert_eq!(value.category(), *category, "{cards}");
                value
            })
            .collect::<Vec<_>>();

        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn wheel_straight() {
        let wheel = eval("AC 2D 3H 4S 5C");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.tiebreak(), &[5, 4, 3, 2, 1]);

        let six_high = eval("2C 3D 4H 5S 6C");
        assert_eq!(six_high.category(), HandCategory::Straight);
        assert!(six_high > wheel);

        // Ace high beats everything else.
        let broadway = eval("TC JD QH KS AC");
        assert_eq!(broadway.tiebreak(), &[14, 13, 12, 11, 10]);
        assert!(broadway > six_high);

        // No wrap around.
        let no_straight = eval("QC KD AH 2S 3C");
        assert_eq!(no_straight.category(), HandCategory::HighCard);

        let steel_wheel = eval("AH 2H 3H 4H 5H");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert!(!steel_wheel.is_royal_flush());
        assert_eq!(steel_wheel.label(), "Straight Flush");
    }

    #[test]
    fn tiebreak_keys() {
        assert_eq!(eval("QC QD QS 8C 8H").tiebreak(), &[12, 8]);
        assert_eq!(eval("8C 8D 8S QC QH").tiebreak(), &[8, 12]);
        assert_eq!(eval("5S 5D 5C 5H JC").tiebreak(), &[5, 11]);
        assert_eq!(eval("TS TD TC 8H 3S").tiebreak(), &[10, 8, 3]);
        assert_eq!(eval("3H 3C JD JS 7C").tiebreak(), &[11, 3, 7]);
        assert_eq!(eval("KS KD 8C 5H 2S").tiebreak(), &[13, 8, 5, 2]);
        assert_eq!(eval("KH 2H 9H JH 6H").tiebreak(), &[13, 11, 9, 6, 2]);

        // Kickers decide within a category.
        assert!(eval("KS KD AC 5H 2S") > eval("KS KD QC JH TS"));
        assert!(eval("QC QD QS 2C 2H") > eval("JC JD JS AC AH"));
        assert!(eval("AH AC 3D 3S 4C") > eval("KH KC QD QS JC"));
        assert!(eval("AH AC 3D 3S 5C") > eval("AH AC 3D 3S 4C"));

        // Suits never break ties.
        assert_eq!(eval("AH KH 9C 7D 2S"), eval("AS KS 9D 7H 2C"));
    }

    #[test]
    fn best_of_seven() {
        // Two three of a kind make a full house with the highest trips.
        let value = eval("9C 9D 9H 4S 4C 4D 2H");
        assert_eq!(value.category(), HandCategory::FullHouse);
        assert_eq!(value.tiebreak(), &[9, 4]);

        // Three pairs play the two highest with the best kicker.
        let value = eval("9C 9D 4H 4S 2C 2D KH");
        assert_eq!(value.category(), HandCategory::TwoPair);
        assert_eq!(value.tiebreak(), &[9, 4, 13]);

        // Six cards to a straight use the highest five.
        let value = eval("4C 5D 6H 7S 8C 9D 2H");
        assert_eq!(value.category(), HandCategory::Straight);
        assert_eq!(value.tiebreak()[0], 9);

        // Six cards hand.
        let value = eval("AS KS QS JS 9S 2D");
        assert_eq!(value.category(), HandCategory::Flush);
        assert_eq!(value.tiebreak(), &[14, 13, 12, 11, 9]);
    }

    #[test]
    fn straight_and_flush_from_different_cards() {
        // 5-9 straight with mixed suits and a spade flush that is not a straight.
        let value = eval("5S 6S 7D 8S 9H KS 2S");
        assert_eq!(value.category(), HandCategory::Flush);

        // Same ranks with the straight cards all spades.
        let value = eval("5S 6S 7S 8S 9S KD 2H");
        assert_eq!(value.category(), HandCategory::StraightFlush);
        assert_eq!(value.tiebreak()[0], 9);
    }

    #[test]
    fn royal_flush_label() {
        let (value, best) = HandValue::eval_with_best_hand(
            &parse_cards("TH JH QH KH AH 2C 3D").unwrap(),
        )
        .unwrap();

        assert!(value.is_royal_flush());
        assert_eq!(value.label(), "Royal Flush");
        assert_eq!(value.category().name(), "Straight Flush");

        let mut best = best.to_vec();
        best.sort();
        assert_eq!(best, parse_cards("TH JH QH KH AH").unwrap());
    }

    #[test]
    fn ordering_invariance() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();

            let value = HandValue::eval(&cards).unwrap();
            for _ in 0..5 {
                cards.shuffle(&mut rng);
                assert_eq!(HandValue::eval(&cards).unwrap(), value);
            }
        }
    }

    #[test]
    fn eval_errors() {
        let cards = parse_cards("AS KS QS JS").unwrap();
        assert_eq!(HandValue::eval(&cards), Err(EvalError::InvalidCardCount(4)));

        let cards = parse_cards("AS KS QS JS TS 9S 8S 7S").unwrap();
        assert_eq!(HandValue::eval(&cards), Err(EvalError::InvalidCardCount(8)));

        let cards = parse_cards("AS KS QS JS AS").unwrap();
        let err = HandValue::eval(&cards).unwrap_err();
        assert_eq!(
            err,
            EvalError::DuplicateCard(DuplicateCards(parse_cards("AS").unwrap()))
        );
        assert_eq!(err.to_string(), "duplicate cards AS");
    }

    // Goes through all the 2.6M five cards hands, slow in debug mode.
    #[test]
    #[ignore]
    fn all_five_cards_hands() {
        let mut counts = [0usize; HandCategory::COUNT];
        for cards in Deck::default().combinations(5) {
            counts[HandValue::eval(&cards).unwrap().category().index()] += 1;
        }

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40]
        );
    }
}
