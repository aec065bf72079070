extern crate std;

use std::collections::VecDeque;
use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::intrusive::{
    list::LinkedList,
    node::ListNode,
    traits::{Linked, NodeWithData},
};

fn values(list: &LinkedList<ListNode<usize>>) -> Vec<usize> {
    list.iter().map(|n| unsafe { *n.as_ref().data() }).collect()
}

fn values_rev(list: &LinkedList<ListNode<usize>>) -> Vec<usize> {
    list.iter().rev().map(|n| unsafe { *n.as_ref().data() }).collect()
}

fn nodes(n: usize) -> Vec<ListNode<usize>> {
    (0..n).map(ListNode::new).collect()
}

#[test]
fn test_list_prepend_append_remove() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut entries = nodes(4);
    let ptrs: Vec<NonNull<ListNode<usize>>> =
        entries.iter_mut().map(NonNull::from).collect();

    unsafe {
        list.append(ptrs[2]);
        assert_eq!(list.first(), Some(ptrs[2]));
        assert_eq!(list.last(), Some(ptrs[2]));
        list.remove(ptrs[2]);
        assert!(list.first().is_none());
        assert!(list.last().is_none());

        list.prepend(ptrs[2]);
        assert_eq!(list.first(), Some(ptrs[2]));
        assert_eq!(list.last(), Some(ptrs[2]));
        list.append(ptrs[3]);
        assert_eq!(list.first(), Some(ptrs[2]));
        assert_eq!(list.last(), Some(ptrs[3]));
        assert_eq!(list.prev(ptrs[3]), Some(ptrs[2]));
        assert_eq!(list.next(ptrs[2]), Some(ptrs[3]));
        list.prepend(ptrs[1]);
        assert_eq!(list.first(), Some(ptrs[1]));
        assert_eq!(list.last(), Some(ptrs[3]));
        assert_eq!(list.prev(ptrs[2]), Some(ptrs[1]));
        assert_eq!(list.next(ptrs[1]), Some(ptrs[2]));
        list.prepend(ptrs[0]);
        assert_eq!(list.first(), Some(ptrs[0]));
        assert_eq!(list.last(), Some(ptrs[3]));
        assert_eq!(list.prev(ptrs[1]), Some(ptrs[0]));
        assert_eq!(list.next(ptrs[0]), Some(ptrs[1]));
        list.assert_valid();
        assert_eq!(list.len(), 4);

        list.remove(ptrs[1]);
        list.assert_valid();
        list.remove(ptrs[2]);
        list.assert_valid();
        list.remove(ptrs[3]);
        list.assert_valid();
        list.remove(ptrs[0]);
        list.assert_valid();
    }

    assert!(list.first().is_none() && list.last().is_none());
    assert!(list.is_empty());
    for entry in &entries {
        assert!(!entry.is_linked());
    }
}

#[test]
fn test_list_order() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut a = ListNode::new(1);
    let mut b = ListNode::new(2);
    let mut c = ListNode::new(3);

    unsafe {
        list.append(NonNull::from(&mut a));
        list.append(NonNull::from(&mut b));
        list.append(NonNull::from(&mut c));
    }

    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(values_rev(&list), vec![3, 2, 1]);
    assert_eq!(list.iter().len(), 3);

    // both ends of the iterator meet in the middle
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(NonNull::from(&mut a)));
    assert_eq!(iter.next_back(), Some(NonNull::from(&mut c)));
    assert_eq!(iter.next(), Some(NonNull::from(&mut b)));
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);

    list.clear();
}

#[test]
fn test_list_prepend_order() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut entries = nodes(5);

    for entry in entries.iter_mut() {
        unsafe { list.prepend(NonNull::from(entry)) };
    }

    assert_eq!(values(&list), vec![4, 3, 2, 1, 0]);
    assert_eq!(values_rev(&list), vec![0, 1, 2, 3, 4]);
    list.clear();
    assert!(entries.iter().all(|e| !e.is_linked()));
}

#[test]
fn test_list_remove_unlinked_is_noop() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut a = ListNode::new(1);
    let mut b = ListNode::new(2);
    let mut stray = ListNode::new(3);

    unsafe {
        // on an empty list
        assert!(list.remove(NonNull::from(&mut stray)).is_none());
        assert!(list.is_empty());

        list.append(NonNull::from(&mut a));
        list.append(NonNull::from(&mut b));
        let first = list.first();
        let last = list.last();

        assert!(list.remove(NonNull::from(&mut stray)).is_none());
        assert_eq!(list.first(), first);
        assert_eq!(list.last(), last);
        assert_eq!(list.len(), 2);

        // removing twice is fine as well
        assert_eq!(list.remove(NonNull::from(&mut a)), Some(NonNull::from(&mut a)));
        assert!(list.remove(NonNull::from(&mut a)).is_none());
        assert_eq!(values(&list), vec![2]);
    }
    list.assert_valid();
    list.clear();
}

#[test]
fn test_list_remove_restores_fresh_entry() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut other = ListNode::new(0);
    let mut node = ListNode::new(7);

    unsafe {
        list.append(NonNull::from(&mut other));
        list.append(NonNull::from(&mut node));
        assert!(node.is_linked());
        assert_eq!(list.prev(NonNull::from(&mut node)), Some(NonNull::from(&mut other)));

        list.remove(NonNull::from(&mut node));
        assert!(!node.is_linked());
        assert!(list.next(NonNull::from(&mut node)).is_none());
        assert!(list.prev(NonNull::from(&mut node)).is_none());
        let entry = Linked::entry(NonNull::from(&mut node)).as_ref();
        assert!(entry.next().is_none() && entry.prev().is_none());

        // and it can be linked again like a fresh one
        list.prepend(NonNull::from(&mut node));
        assert_eq!(values(&list), vec![7, 0]);
    }
    list.clear();
}

#[test]
fn test_list_boundaries() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut a = ListNode::new(1);
    let mut b = ListNode::new(2);

    unsafe {
        list.append(NonNull::from(&mut a));
        assert!(list.prev(NonNull::from(&mut a)).is_none());
        assert!(list.next(NonNull::from(&mut a)).is_none());

        list.append(NonNull::from(&mut b));
        assert!(list.prev(NonNull::from(&mut a)).is_none());
        assert!(list.next(NonNull::from(&mut b)).is_none());
    }
    list.clear();
}

#[test]
fn test_list_pop() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut entries = nodes(3);
    for entry in entries.iter_mut() {
        unsafe { list.append(NonNull::from(entry)) };
    }

    unsafe {
        let first = list.pop_front().unwrap();
        assert_eq!(*first.as_ref().data(), 0);
        assert!(!first.as_ref().is_linked());

        let last = list.pop_back().unwrap();
        assert_eq!(*last.as_ref().data(), 2);
        assert!(!last.as_ref().is_linked());
    }

    assert_eq!(values(&list), vec![1]);
    assert!(list.pop_back().is_some());
    assert!(list.pop_front().is_none());
    assert!(list.pop_back().is_none());
    list.assert_valid();
}

#[test]
fn test_unlinked_node_can_move() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let node = ListNode::new(5);
    let mut boxed = std::boxed::Box::new(node);
    assert!(!boxed.is_linked());

    unsafe {
        list.append(NonNull::from(&mut *boxed));
        list.remove(NonNull::from(&mut *boxed));
    }

    let mut moved = *boxed;
    assert!(!moved.is_linked());
    unsafe { list.append(NonNull::from(&mut moved)) };
    assert_eq!(values(&list), vec![5]);
    list.clear();
    assert_eq!(moved.into_inner(), 5);
}

#[test]
fn test_list_random_operations() {
    const NODES: usize = 32;
    const ROUNDS: usize = 2_000;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut entries = nodes(NODES);
    let ptrs: Vec<NonNull<ListNode<usize>>> =
        entries.iter_mut().map(NonNull::from).collect();
    let mut model = VecDeque::new();

    for _ in 0..ROUNDS {
        let i = rng.random_range(0..NODES);
        let linked = unsafe { ptrs[i].as_ref().is_linked() };

        unsafe {
            match (linked, rng.random_range(0..3)) {
                (false, 0) => {
                    list.prepend(ptrs[i]);
                    model.push_front(i);
                }
                (false, 1) => {
                    list.append(ptrs[i]);
                    model.push_back(i);
                }
                (_, _) => {
                    let removed = list.remove(ptrs[i]);
                    assert_eq!(removed.is_some(), linked);
                    model.retain(|&m| m != i);
                }
            }
        }

        list.assert_valid();
        assert_eq!(list.is_empty(), model.is_empty());
        assert_eq!(list.first().is_none(), list.last().is_none());
        assert_eq!(list.len(), model.len());
        assert_eq!(values(&list), model.iter().copied().collect::<Vec<_>>());
        assert_eq!(values_rev(&list), model.iter().rev().copied().collect::<Vec<_>>());

        let visited: HashSet<NonNull<ListNode<usize>>> = list.iter().collect();
        assert_eq!(visited.len(), model.len());
    }

    list.clear();
    assert!(entries.iter().all(|e| !e.is_linked()));
}

#[test]
fn test_list_behind_lock() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 64;

    let list = spin::Mutex::new(LinkedList::<ListNode<usize>>::new());
    let mut entries = nodes(THREADS * PER_THREAD);

    crossbeam_utils::thread::scope(|s| {
        for chunk in entries.chunks_mut(PER_THREAD) {
            let list = &list;
            s.spawn(move |_| {
                for entry in chunk.iter_mut() {
                    unsafe { list.lock().append(NonNull::from(entry)) };
                }
                for entry in chunk.iter_mut().filter(|e| e.data() % 2 == 0) {
                    unsafe { list.lock().remove(NonNull::from(entry)) };
                }
            });
        }
    })
    .unwrap();

    let mut list = list.into_inner();
    list.assert_valid();
    assert_eq!(list.len(), THREADS * PER_THREAD / 2);
    assert!(values(&list).iter().all(|v| v % 2 == 1));

    list.clear();
    assert!(entries.iter().all(|e| !e.is_linked()));
}

#[test]
fn test_reinit_unlinked_entry_and_empty_list() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut a = ListNode::new(1);
    let mut b = ListNode::new(2);

    unsafe {
        list.append(NonNull::from(&mut a));
        list.remove(NonNull::from(&mut a));
        Linked::entry(NonNull::from(&mut a)).as_mut().init();
        Linked::entry(NonNull::from(&mut b)).as_mut().init();
    }
    assert!(!a.is_linked() && !b.is_linked());

    list.init();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    unsafe {
        list.append(NonNull::from(&mut a));
        list.prepend(NonNull::from(&mut b));
    }
    assert_eq!(values(&list), vec![2, 1]);
    list.assert_valid();

    list.clear();
    list.init();
    assert!(list.first().is_none() && list.last().is_none());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "re-initializing a linked list entry")]
fn test_reinit_linked_entry_panics() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut node = ListNode::new(1);
    unsafe {
        list.append(NonNull::from(&mut node));
        Linked::entry(NonNull::from(&mut node)).as_mut().init();
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "re-initializing a non-empty list")]
fn test_reinit_non_empty_list_panics() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut node = ListNode::new(1);
    unsafe { list.append(NonNull::from(&mut node)) };
    list.init();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "already linked")]
fn test_double_insert_panics() {
    let mut list = LinkedList::<ListNode<usize>>::new();
    let mut node = ListNode::new(1);
    unsafe {
        list.append(NonNull::from(&mut node));
        list.prepend(NonNull::from(&mut node));
    }
}
