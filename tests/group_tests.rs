use rs2_seq::prelude::*;
use rs2_seq::seq::{Group, Grouper};
use rs2_seq::seq_metrics::with_metrics;

fn groups_of(pipeline: &Pipeline<GroupRef<i32, i32>>) -> Vec<(i32, Vec<i32>)> {
    pipeline
        .map(|group| (group.key(), group.into_pipeline().to_vec()))
        .to_vec()
}

#[test]
fn test_group_identity_in_key_order() {
    let groups = from_vec(vec![1, 2, 2, 3, 1]).into_pipeline().group_eager(|x| *x);

    assert_eq!(
        groups_of(&groups),
        vec![(1, vec![1, 1]), (2, vec![2, 2]), (3, vec![3])]
    );
    assert_eq!(groups.count(), 3);
}

#[test]
fn test_groups_ordered_by_key_not_first_sight() {
    let words = from_vec(vec!["pear", "fig", "apple", "kiwi", "plum", "date"]).into_pipeline();
    let by_len = words.group_eager(|w| w.len());

    let keys = by_len.map(|group| group.key()).to_vec();
    assert_eq!(keys, vec![3, 4, 5]);

    let four = by_len.first_by(|group| group.key() == 4).map(|group| group.to_vec());
    assert_eq!(four, Some(vec!["pear", "kiwi", "plum", "date"]));
}

#[test]
fn test_group_of_empty_source() {
    let groups = empty::<i32>().into_pipeline().group_eager(|x| *x);
    assert!(!groups.any());
    assert_eq!(groups.count(), 0);
    assert!(groups.first().is_none());
}

#[test]
fn test_grouping_drains_source_at_construction() {
    let (source, metrics) = with_metrics(from_vec(vec![1, 2, 2, 3, 1]).shared(), None);

    let _groups = Pipeline::new(source).group_eager(|x| *x);

    let snapshot = metrics.borrow().clone();
    assert_eq!(snapshot.items_yielded, 5);
    assert_eq!(snapshot.resets, 1);
    assert_eq!(snapshot.exhaustions, 1);
}

#[test]
fn test_grouper_reset_never_touches_source() {
    let (source, metrics) = with_metrics(from_vec(vec![3, 1, 2]).shared(), None);
    let groups = Pipeline::new(source).group_eager(|x| x % 2);

    assert_eq!(groups.count(), 2);
    assert_eq!(groups.count(), 2);
    assert_eq!(groups.flatten().to_vec(), vec![2, 3, 1]);

    let snapshot = metrics.borrow().clone();
    assert_eq!(snapshot.items_yielded, 3);
    assert_eq!(snapshot.resets, 1);
}

#[test]
fn test_grouper_reports_drained_items() {
    let source = from_vec(vec![1, 2]).shared();
    let grouper = Grouper::drain(source.clone(), |x: &i32| *x);
    assert_eq!(grouper.drained(), 2);
    assert_eq!(grouper.len(), 2);
    assert_eq!(grouper.keys(), vec![1, 2]);
}

#[test]
fn test_grouper_lookup_by_key() {
    let grouper = Grouper::drain(from_vec(vec![5, 10, 15, 11]).shared(), |x: &i32| x % 5);

    let zero = grouper.group(&0).expect("group for key 0");
    assert_eq!(zero.key(), 0);
    assert_eq!(zero.to_vec(), vec![5, 10, 15]);
    assert!(grouper.group(&3).is_none());
}

#[test]
fn test_add_item_before_iteration() {
    let grouper = Grouper::drain(from_vec(vec![1, 3]).shared(), |x: &i32| x % 2);
    let odd = grouper.group(&1).expect("odd group");

    assert!(!odd.is_frozen());
    assert_eq!(odd.add_item(5), Ok(()));
    assert_eq!(odd.clone().into_pipeline().to_vec(), vec![1, 3, 5]);
}

#[test]
fn test_add_item_after_iteration_is_rejected() {
    let mut group = Group::new("k");
    group.add_item(1).expect("append before iteration");
    group.reset();

    assert!(group.is_frozen());
    assert_eq!(group.add_item(2), Err(SeqError::FrozenGroup));
    assert_eq!(group.next(), Some(1));
    assert_eq!(group.next(), None);
}

#[test]
fn test_pulling_freezes_group() {
    let group = GroupRef::new(Group::new(0));
    group.add_item(1).expect("append before iteration");

    let mut cursor = group.clone();
    cursor.next();

    assert!(group.is_frozen());
    assert_eq!(group.add_item(2), Err(SeqError::FrozenGroup));
    assert_eq!(group.len(), 1);
}

#[test]
fn test_group_walk_is_positional_and_rewindable() {
    let mut group = Group::new('a');
    for item in [1, 2, 3] {
        group.add_item(item).expect("append before iteration");
    }

    group.reset();
    assert_eq!(group.next(), Some(1));
    assert_eq!(group.next(), Some(2));
    group.reset();
    assert_eq!(group.next(), Some(1));
    assert_eq!(group.key(), 'a');
}

#[test]
fn test_groups_are_ordinary_seqs() {
    let groups = from_vec(vec![1, 2, 3, 4, 5, 6]).into_pipeline().group_eager(|x| x % 3);

    // Regroup each bucket by parity and count the sub-buckets.
    let sub_counts = groups
        .map(|group| group.into_pipeline().group_eager(|x| x % 2).count())
        .to_vec();
    assert_eq!(sub_counts, vec![2, 2, 2]);

    assert_eq!(groups.flatten().to_vec(), vec![3, 6, 1, 4, 2, 5]);
}

#[test]
fn test_group_capacity_from_config() {
    let pipeline = PipelineBuilder::new()
        .with_config(PipelineConfig::new().name("orders").group_capacity(16))
        .source_seq(from_vec(vec![1, 1, 2]))
        .build()
        .expect("pipeline");

    let groups = pipeline.group_eager(|x| *x);
    assert_eq!(groups.config().group_capacity, 16);
    assert_eq!(groups.flatten().to_vec(), vec![1, 1, 2]);
}
