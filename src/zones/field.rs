//! A player's field: one ordered stack of cards per color.
//!
//! Stacks hold properties, wildcards currently pointed at that color, and
//! any House/Hotel placed on the set. Only properties and wildcards count
//! toward completeness; improvements count only toward asset value.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, CardId, PropertyColor};

/// Property stacks indexed by color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    stacks: [Vec<Card>; PropertyColor::COUNT],
}

impl Field {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards under a color, bottom first.
    #[must_use]
    pub fn stack(&self, color: PropertyColor) -> &[Card] {
        &self.stacks[color.index()]
    }

    /// A single card by position within its color stack.
    #[must_use]
    pub fn get(&self, color: PropertyColor, index: usize) -> Option<&Card> {
        self.stacks[color.index()].get(index)
    }

    /// Put a card on top of a color stack.
    pub fn push(&mut self, color: PropertyColor, card: Card) {
        self.stacks[color.index()].push(card);
    }

    /// Remove a card by position within its color stack.
    pub fn remove(&mut self, color: PropertyColor, index: usize) -> Option<Card> {
        let stack = &mut self.stacks[color.index()];
        (index < stack.len()).then(|| stack.remove(index))
    }

    /// Empty a color stack, returning its cards in order.
    pub fn take_stack(&mut self, color: PropertyColor) -> Vec<Card> {
        std::mem::take(&mut self.stacks[color.index()])
    }

    /// Remove every card whose id is in `ids`, in color then stack order.
    pub fn extract(&mut self, ids: &FxHashSet<CardId>) -> Vec<Card> {
        let mut taken = Vec::new();
        for stack in &mut self.stacks {
            let mut i = 0;
            while i < stack.len() {
                if ids.contains(&stack[i].id) {
                    taken.push(stack.remove(i));
                } else {
                    i += 1;
                }
            }
        }
        taken
    }

    /// Properties and wildcards under a color.
    #[must_use]
    pub fn property_count(&self, color: PropertyColor) -> usize {
        self.stack(color).iter().filter(|c| c.is_property()).count()
    }

    /// Whether a color holds at least `required` properties.
    #[must_use]
    pub fn is_complete(&self, color: PropertyColor) -> bool {
        self.property_count(color) >= color.required()
    }

    /// Colors holding a complete set, in catalog order.
    pub fn complete_colors(&self) -> impl Iterator<Item = PropertyColor> + '_ {
        PropertyColor::ALL
            .into_iter()
            .filter(move |&color| self.is_complete(color))
    }

    /// Number of complete sets.
    #[must_use]
    pub fn complete_sets(&self) -> usize {
        self.complete_colors().count()
    }

    /// Whether a color stack carries an improvement of this kind.
    #[must_use]
    pub fn has_improvement(&self, color: PropertyColor, kind: ActionKind) -> bool {
        self.stack(color)
            .iter()
            .any(|c| c.action_kind() == Some(kind))
    }

    /// Complete sets that can take an improvement of this kind, in catalog order.
    ///
    /// A House needs a complete set with no House or Hotel; a Hotel needs a
    /// complete set that already has a House and no Hotel.
    pub fn improvement_targets(
        &self,
        kind: ActionKind,
    ) -> impl Iterator<Item = PropertyColor> + '_ {
        self.complete_colors().filter(move |&color| {
            let house = self.has_improvement(color, ActionKind::House);
            let hotel = self.has_improvement(color, ActionKind::Hotel);
            match kind {
                ActionKind::House => !house && !hotel,
                ActionKind::Hotel => house && !hotel,
                _ => false,
            }
        })
    }

    /// Face value of every card on the field.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.stacks.iter().flatten().map(|c| c.value).sum()
    }

    /// Non-empty stacks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyColor, &[Card])> {
        PropertyColor::ALL
            .into_iter()
            .zip(self.stacks.iter())
            .filter(|(_, stack)| !stack.is_empty())
            .map(|(color, stack)| (color, stack.as_slice()))
    }

    /// Total number of cards on the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Whether the field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(id: u32, color: PropertyColor) -> Card {
        Card::property(CardId::new(id), color.name(), 2, color)
    }

    #[test]
    fn test_completeness_ignores_improvements() {
        let mut field = Field::new();
        field.push(PropertyColor::Brown, prop(1, PropertyColor::Brown));
        field.push(
            PropertyColor::Brown,
            Card::action(CardId::new(2), "House", 3, ActionKind::House),
        );

        assert_eq!(field.stack(PropertyColor::Brown).len(), 2);
        assert_eq!(field.property_count(PropertyColor::Brown), 1);
        assert!(!field.is_complete(PropertyColor::Brown));

        field.push(PropertyColor::Brown, prop(3, PropertyColor::Brown));
        assert!(field.is_complete(PropertyColor::Brown));
        assert_eq!(field.complete_sets(), 1);
    }

    #[test]
    fn test_improvement_targets() {
        let mut field = Field::new();
        field.push(PropertyColor::Utility, prop(1, PropertyColor::Utility));
        field.push(PropertyColor::Utility, prop(2, PropertyColor::Utility));
        field.push(PropertyColor::Green, prop(3, PropertyColor::Green));

        let houses: Vec<_> = field.improvement_targets(ActionKind::House).collect();
        assert_eq!(houses, vec![PropertyColor::Utility]);
        assert_eq!(field.improvement_targets(ActionKind::Hotel).count(), 0);

        field.push(
            PropertyColor::Utility,
            Card::action(CardId::new(4), "House", 3, ActionKind::House),
        );
        assert_eq!(field.improvement_targets(ActionKind::House).count(), 0);
        let hotels: Vec<_> = field.improvement_targets(ActionKind::Hotel).collect();
        assert_eq!(hotels, vec![PropertyColor::Utility]);
    }

    #[test]
    fn test_extract_by_identity() {
        let mut field = Field::new();
        field.push(PropertyColor::Red, prop(1, PropertyColor::Red));
        field.push(PropertyColor::Red, prop(2, PropertyColor::Red));
        field.push(PropertyColor::Pink, prop(3, PropertyColor::Pink));

        let ids: FxHashSet<_> = [CardId::new(1), CardId::new(3)].into_iter().collect();
        let taken = field.extract(&ids);

        assert_eq!(taken.len(), 2);
        assert_eq!(field.len(), 1);
        assert_eq!(field.stack(PropertyColor::Red)[0].id, CardId::new(2));
        assert!(field.stack(PropertyColor::Pink).is_empty());
    }

    #[test]
    fn test_remove_and_take_stack() {
        let mut field = Field::new();
        field.push(PropertyColor::Orange, prop(1, PropertyColor::Orange));
        field.push(PropertyColor::Orange, prop(2, PropertyColor::Orange));

        assert!(field.remove(PropertyColor::Orange, 5).is_none());
        assert_eq!(field.remove(PropertyColor::Orange, 0).map(|c| c.id), Some(CardId::new(1)));

        let rest = field.take_stack(PropertyColor::Orange);
        assert_eq!(rest.len(), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_iter_skips_empty_stacks() {
        let mut field = Field::new();
        field.push(PropertyColor::Railroad, prop(1, PropertyColor::Railroad));
        field.push(PropertyColor::Brown, prop(2, PropertyColor::Brown));

        let colors: Vec<_> = field.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, vec![PropertyColor::Brown, PropertyColor::Railroad]);
        assert_eq!(field.total_value(), 4);
    }
}
