use crate::model::{Aspect, Chapter};
use rand::Rng;
use rand::seq::SliceRandom;

/// Flattens the aspects of `chapters` (in the given order) and shuffles them.
pub fn shuffled_aspects<'a, I, R>(chapters: I, rng: &mut R) -> Vec<Aspect>
where
    I: IntoIterator<Item = &'a Chapter>,
    R: Rng + ?Sized,
{
    let mut aspects: Vec<Aspect> = chapters
        .into_iter()
        .flat_map(|chapter| chapter.aspects.iter().cloned())
        .collect();
    aspects.shuffle(rng);
    aspects
}

/// New pass over an exhausted order: the last shown item goes to the end,
/// everything before it is shuffled.
pub fn reshuffle<T, R: Rng + ?Sized>(mut order: Vec<T>, rng: &mut R) -> Vec<T> {
    let Some(last_shown) = order.pop() else {
        return order;
    };
    order.shuffle(rng);
    order.push(last_shown);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut v = items.to_vec();
        v.sort();
        v
    }

    #[test]
    fn reshuffle_keeps_every_item() {
        let mut rng = StdRng::seed_from_u64(7);
        let original: Vec<u32> = (0..50).collect();
        let next = reshuffle(original.clone(), &mut rng);
        assert_eq!(sorted(&next), original);
    }

    #[test]
    fn reshuffle_reaches_every_permutation_of_the_head() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let next = reshuffle(vec![1, 2, 3, 4], &mut rng);
            assert_eq!(next[3], 4);
            seen.insert([next[0], next[1], next[2]]);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn reshuffle_is_a_permutation_with_duplicates() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let order = vec!["a", "b", "b", "c", "d", "a"];
            let next = reshuffle(order.clone(), &mut rng);
            assert_eq!(sorted(&next), sorted(&order));
        }
    }

    #[test]
    fn last_shown_is_never_first() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let order: Vec<u32> = (0..(2 + seed as u32 % 6)).collect();
            let last = *order.last().unwrap();
            let next = reshuffle(order, &mut rng);
            assert_ne!(next[0], last, "seed {seed}");
            assert_eq!(*next.last().unwrap(), last);
        }
    }

    #[test]
    fn single_item_repeats_and_empty_stays_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(reshuffle(vec!["only"], &mut rng), vec!["only"]);
        assert!(reshuffle(Vec::<u8>::new(), &mut rng).is_empty());
    }

    #[test]
    fn shuffled_aspects_flattens_selected_chapters() {
        let mut rng = StdRng::seed_from_u64(3);
        let chapter = |title: &str, ids: &[&str]| Chapter {
            title: title.into(),
            aspects: ids
                .iter()
                .map(|id| Aspect {
                    id: id.to_string(),
                    value: format!("v{id}"),
                })
                .collect(),
        };
        let chapters = [chapter("A", &["1", "2"]), chapter("B", &["3"])];
        let order = shuffled_aspects(chapters.iter(), &mut rng);
        let mut ids: Vec<_> = order.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
