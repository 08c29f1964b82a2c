// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Known cards of an odds query.
use serde::{Deserialize, Serialize};
use std::fmt;

use hitcalc_cards::{Card, Deck, cards_to_string, check_distinct};

use crate::EquityError;

/// Number of hole cards.
pub const HOLE_SIZE: usize = 2;

/// Number of community cards at the river.
pub const BOARD_SIZE: usize = 5;

/// The number of community cards a query must have.
///
/// The upper bound is always the full board, the lower bound defaults to the
/// flop and can be relaxed down to preflop queries with no community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunityPolicy {
    min_community: usize,
}

impl CommunityPolicy {
    /// Queries need at least the flop.
    pub const FLOP: CommunityPolicy = CommunityPolicy { min_community: 3 };

    /// Queries from preflop to the river.
    pub const ANY: CommunityPolicy = CommunityPolicy { min_community: 0 };

    /// Creates a policy with the given minimum number of community cards,
    /// clamped to the board size.
    pub fn new(min_community: usize) -> Self {
        Self {
            min_community: min_community.min(BOARD_SIZE),
        }
    }

    /// The minimum number of community cards.
    pub fn min_community(&self) -> usize {
        self.min_community
    }
}

impl Default for CommunityPolicy {
    fn default() -> Self {
        Self::FLOP
    }
}

/// Validated hole and community cards.
///
/// Deserialized cards go through [KnownCards::with_policy] with
/// [CommunityPolicy::ANY].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawKnownCards")]
pub struct KnownCards {
    hole: [Card; HOLE_SIZE],
    community: Vec<Card>,
}

impl KnownCards {
    /// Validates the cards with the default policy of 3 to 5 community cards.
    pub fn new(hole: &[Card], community: &[Card]) -> Result<Self, EquityError> {
        Self::with_policy(hole, community, CommunityPolicy::default())
    }

    /// Validates the cards with the given community cards policy.
    ///
    /// Checks in order the number of hole cards, the number of community cards,
    /// and that no card appears twice.
    pub fn with_policy(
        hole: &[Card],
        community: &[Card],
        policy: CommunityPolicy,
    ) -> Result<Self, EquityError> {
        let hole: [Card; HOLE_SIZE] = hole
            .try_into()
            .map_err(|_| EquityError::InvalidHoleCardCount(hole.to_vec()))?;

        if !(policy.min_community()..=BOARD_SIZE).contains(&community.len()) {
            return Err(EquityError::InvalidCommunityCardCount {
                cards: community.to_vec(),
                min: policy.min_community(),
            });
        }

        let known = Self {
            hole,
            community: community.to_vec(),
        };
        check_distinct(&known.cards())?;

        Ok(known)
    }

    /// The hole cards.
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// The community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The hole cards followed by the community cards.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(HOLE_SIZE + BOARD_SIZE);
        cards.extend_from_slice(&self.hole);
        cards.extend_from_slice(&self.community);
        cards
    }

    /// Number of community cards still to come.
    pub fn missing(&self) -> usize {
        BOARD_SIZE.saturating_sub(self.community.len())
    }

    /// The deck without the known cards.
    pub fn reduced_deck(&self) -> Result<Deck, EquityError> {
        Ok(Deck::without(&self.cards())?)
    }
}

#[derive(Deserialize)]
struct RawKnownCards {
    hole: Vec<Card>,
    community: Vec<Card>,
}

impl TryFrom<RawKnownCards> for KnownCards {
    type Error = EquityError;

    fn try_from(raw: RawKnownCards) -> Result<Self, Self::Error> {
        Self::with_policy(&raw.hole, &raw.community, CommunityPolicy::ANY)
    }
}

impl fmt::Display for KnownCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}]",
            cards_to_string(&self.hole),
            cards_to_string(&self.community)
        )
    }
}
