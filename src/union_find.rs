use std::collections::HashMap;
use std::hash::Hash;

/// Equivalence classes over an arbitrary set of keys.
///
/// Every tracked key starts in its own singleton class; [`union`](UnionFind::union) merges classes and [`find`](UnionFind::find) reports a class's leader and size.
/// Each key maps to a `(leader, class size)` record, with the record at the leader itself holding the authoritative size.
pub struct UnionFind<K> {
    leaders: HashMap<K, (K, usize)>,
}

impl<K> UnionFind<K>
where
    K: Copy + Eq + Hash,
{
    /// Builds a structure tracking `members`, each initially in its own class of size 1.
    pub fn new(members: impl IntoIterator<Item = K>) -> Self {
        Self {
            leaders: members.into_iter().map(|member| (member, (member, 1))).collect(),
        }
    }

    /// The class leader for `key` and the size of that class, or `None` for untracked keys.
    ///
    /// Every key visited on the walk to the leader is re-pointed directly at the discovered record, so repeated lookups amortize to near-constant time.
    pub fn find(&mut self, key: K) -> Option<(K, usize)> {
        let mut current = key;
        let mut path = Vec::new();

        loop {
            let (leader, size) = *self.leaders.get(&current)?;
            if leader == current {
                for visited in path {
                    self.leaders.insert(visited, (leader, size));
                }
                return Some((leader, size));
            }
            path.push(current);
            current = leader;
        }
    }

    /// Merges the classes containing `a` and `b`; a no-op if they already share a class or either key is untracked.
    pub fn union(&mut self, a: K, b: K) {
        let (Some((a_leader, a_size)), Some((b_leader, b_size))) = (self.find(a), self.find(b)) else {
            return;
        };

        if a_leader != b_leader {
            let merged = (b_leader, a_size + b_size);
            self.leaders.insert(a_leader, merged);
            self.leaders.insert(b_leader, merged);
        }
    }

    /// Whether `a` and `b` are in the same class. Untracked keys are in no class at all.
    pub fn connected(&mut self, a: K, b: K) -> bool {
        match (self.find(a), self.find(b)) {
            (Some((a_leader, _)), Some((b_leader, _))) => a_leader == b_leader,
            _ => false,
        }
    }
}
