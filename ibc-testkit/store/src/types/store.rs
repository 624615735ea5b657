use std::fmt::Debug;
use std::marker::PhantomData;

use crate::avl::AvlTree;
use crate::context::Store;
use crate::error::StoreError;
use crate::types::{Height, Path};
use crate::utils::codec::{BinCodec, JsonCodec};
use crate::utils::Codec;

// A state type that represents a snapshot of the store at every block.
// The value is a `Vec<u8>` to allow stored types to choose their own serde.
pub type State = AvlTree<Path, Vec<u8>>;

/// A `TypedStore` that uses the `JsonCodec`
pub type JsonStore<K, V> = TypedStore<K, JsonCodec<V>>;

/// A `TypedStore` that uses the `BinCodec`
pub type BinStore<K, V> = TypedStore<K, BinCodec<V>>;

/// Schema binding a family of keys `K` to the codec `C` of their values.
///
/// Holds no data: the same schema reads and writes any [`Store`], which lets
/// a context and its overlays share one set of typed accessors.
#[derive(Clone, Debug)]
pub struct TypedStore<K, C> {
    _key: PhantomData<K>,
    _codec: PhantomData<C>,
}

impl<K, C, V> TypedStore<K, C>
where
    C: Codec<Type = V>,
    K: Into<Path> + Clone,
{
    #[inline]
    pub fn set<S: Store>(store: &mut S, path: K, value: V) -> Result<Option<V>, StoreError> {
        let path = path.into();
        let encoded = C::encode(&value).ok_or_else(|| StoreError::Encoding {
            path: path.to_string(),
        })?;
        store
            .set(path, encoded.as_ref().to_vec())
            .map(|prev_val| prev_val.and_then(|v| C::decode(&v)))
    }

    #[inline]
    pub fn get<S: Store>(store: &S, height: Height, path: &K) -> Option<V> {
        store
            .get(height, &path.clone().into())
            .and_then(|v| C::decode(&v))
    }

    #[inline]
    pub fn get_keys<S: Store>(store: &S, key_prefix: &Path) -> Vec<Path> {
        store.get_keys(key_prefix)
    }
}
