use allocator_api2::alloc::Allocator;
use crate::Link;
use crate::Node;

pub(crate) fn len<T, A>(chain: &Link<T, A>) -> usize
where
  A: Allocator
{
  let mut n = 0;
  let mut cursor = chain.as_deref();

  while let Some(node) = cursor {
    n += 1;
    cursor = node.next.as_deref();
  }

  n
}

// Walks `steps` links past `node`, severs the chain there and returns the
// detached back half.

fn split_after<T, A>(node: &mut Node<T, A>, steps: usize) -> Link<T, A>
where
  A: Allocator
{
  let mut node = node;
  let mut steps = steps;

  while steps > 0 {
    node = match node.next.as_deref_mut() {
      Some(next) => next,
      None => return None,
    };
    steps -= 1;
  }

  node.next.take()
}

// NB: On equal head values the node from `a` is taken first, which keeps
// the merge stable.

fn merge<T, A>(a: Link<T, A>, b: Link<T, A>) -> Link<T, A>
where
  T: Ord,
  A: Allocator
{
  let mut a = a;
  let mut b = b;
  let mut merged: Link<T, A> = None;
  let mut tail = &mut merged;

  loop {
    match (a, b) {
      (None, rest) | (rest, None) => {
        *tail = rest;
        break;
      }
      (Some(mut x), Some(y)) if x.value <= y.value => {
        a = x.next.take();
        b = Some(y);
        tail = &mut tail.insert(x).next;
      }
      (x, Some(mut y)) => {
        b = y.next.take();
        a = x;
        tail = &mut tail.insert(y).next;
      }
    }
  }

  merged
}

pub(crate) fn sort<T, A>(chain: Link<T, A>) -> Link<T, A>
where
  T: Ord,
  A: Allocator
{
  let n = len(&chain);

  if n <= 1 {
    return chain;
  }

  let mut front = chain;

  // The node `n / 2 - 1` links in is the last node of the front half, so
  // the front half keeps `n / 2` nodes.

  let back = match front.as_deref_mut() {
    Some(first) => split_after(first, n / 2 - 1),
    None => None,
  };

  merge(sort(front), sort(back))
}
