//! Card, deck and player tests.

use highcard::{
    ACE_OF_SPADES, Card, DECK_SIZE, Deck, DrawError, MAX_RANK, MIN_RANK, Player, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn higher_rank_beats_any_suit() {
    for high in MIN_RANK + 1..=MAX_RANK {
        for low in MIN_RANK..high {
            for a in Suit::ALL {
                for b in Suit::ALL {
                    assert!(card(high, a) > card(low, b));
                }
            }
        }
    }
}

#[test]
fn equal_rank_breaks_on_suit() {
    assert!(card(10, Suit::Spades) > card(10, Suit::Hearts));
    assert!(card(10, Suit::Hearts) > card(10, Suit::Diamonds));
    assert!(card(10, Suit::Diamonds) > card(10, Suit::Clubs));
    assert!(Suit::Spades > Suit::Clubs);
    assert_eq!(card(7, Suit::Hearts), card(7, Suit::Hearts));
    assert_ne!(card(7, Suit::Hearts), card(7, Suit::Clubs));
}

#[test]
fn card_display() {
    assert_eq!(card(14, Suit::Spades).to_string(), "(14, SPADES)");
    assert_eq!(card(2, Suit::Diamonds).to_string(), "(2, DIAMONDS)");
    assert_eq!(ACE_OF_SPADES, card(14, Suit::Spades));
}

#[test]
fn fresh_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen = deck.cards().to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);

    for rank in MIN_RANK..=MAX_RANK {
        for suit in Suit::ALL {
            assert!(deck.cards().contains(&card(rank, suit)));
        }
    }

    // Rank-major layout, spades first.
    assert_eq!(deck.cards()[0], card(2, Suit::Spades));
    assert_eq!(deck.cards()[3], card(2, Suit::Clubs));
    assert_eq!(deck.cards()[DECK_SIZE - 1], card(14, Suit::Clubs));
}

#[test]
fn draw_takes_from_top() {
    let mut deck = Deck::new();
    let drawn = deck.draw(2).unwrap();

    assert_eq!(drawn, vec![card(14, Suit::Clubs), card(14, Suit::Hearts)]);
    assert_eq!(deck.len(), DECK_SIZE - 2);
    assert!(!deck.cards().contains(&card(14, Suit::Clubs)));

    assert_eq!(deck.draw(0).unwrap(), Vec::new());
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn draw_too_many_leaves_deck_unchanged() {
    let mut deck = Deck::from_cards(vec![card(3, Suit::Clubs), card(4, Suit::Hearts)]);
    let before = deck.clone();

    assert_eq!(
        deck.draw(3).unwrap_err(),
        DrawError::NotEnoughCards {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck, before);

    assert_eq!(deck.draw(2).unwrap().len(), 2);
    assert!(deck.is_empty());
    assert!(deck.draw(1).is_err());
}

#[test]
fn shuffle_keeps_cards_and_changes_order() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck.cards(), Deck::new().cards());

    let mut sorted = deck.cards().to_vec();
    sorted.sort();
    let mut expected = Deck::new().cards().to_vec();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn shuffle_is_reproducible_with_seed() {
    assert_eq!(Deck::shuffled(11), Deck::shuffled(11));
}

#[test]
fn honest_player_reveals_highest_card() {
    let player = Player::new("Alice");
    assert_eq!(player.strongest_card(), None);

    player.set_hand(vec![card(9, Suit::Spades), card(9, Suit::Hearts)]);
    assert_eq!(player.strongest_card(), Some(card(9, Suit::Spades)));

    player.set_hand(vec![card(3, Suit::Clubs), card(12, Suit::Diamonds)]);
    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.strongest_card(), Some(card(12, Suit::Diamonds)));
    assert!(!player.is_cheater());
}

#[test]
fn cheater_substitutes_ace_about_a_fifth_of_the_time() {
    const TRIALS: usize = 10_000;

    let cheater = Player::cheater("Eve", 2024);
    assert!(cheater.is_cheater());
    cheater.set_hand(vec![card(2, Suit::Clubs), card(3, Suit::Clubs)]);

    let aces = (0..TRIALS)
        .filter(|_| cheater.strongest_card() == Some(ACE_OF_SPADES))
        .count();
    assert!((1_700..=2_300).contains(&aces), "aces = {aces}");

    // The hand itself is never touched.
    assert_eq!(
        cheater.hand(),
        vec![card(2, Suit::Clubs), card(3, Suit::Clubs)]
    );
}

#[test]
fn cheater_with_empty_hand_only_reveals_the_ace() {
    let cheater = Player::cheater("Eve", 5);

    let revealed: Vec<_> = (0..1_000).map(|_| cheater.strongest_card()).collect();
    assert!(revealed.iter().all(|c| c.is_none() || *c == Some(ACE_OF_SPADES)));
    assert!(revealed.contains(&Some(ACE_OF_SPADES)));
    assert!(revealed.contains(&None));
}

#[test]
fn cheat_chance_bounds() {
    let never = Player::cheater_with_chance("Nora", 1, 0);
    let always = Player::cheater_with_chance("Alex", 1, 10);
    let hand = vec![card(5, Suit::Hearts), card(6, Suit::Hearts)];
    never.set_hand(hand.clone());
    always.set_hand(hand);

    for _ in 0..100 {
        assert_eq!(never.strongest_card(), Some(card(6, Suit::Hearts)));
        assert_eq!(always.strongest_card(), Some(ACE_OF_SPADES));
    }
}
