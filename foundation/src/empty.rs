use alloc::{
  borrow::{Cow, ToOwned},
  boxed::Box,
  collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
  ffi::CString,
  rc::Rc,
  string::String,
  sync::Arc,
  vec::Vec,
};
use core::ffi::CStr;

/// Anything that can be asked whether it holds nothing.
///
/// Absent values (`None`) are empty, text is empty at zero length and
/// collections are empty at zero elements. Every other value is never empty,
/// so any type can join with a bare `impl Emptiness for Track {}`.
pub trait Emptiness {
  fn is_empty_value(&self) -> bool {
    false
  }
}

/// `is_empty(&None::<String>)`, `is_empty("")`, `is_empty(&vec![1])`...
pub fn is_empty<T: Emptiness + ?Sized>(thing: &T) -> bool {
  thing.is_empty_value()
}

impl<T: Emptiness> Emptiness for Option<T> {
  fn is_empty_value(&self) -> bool {
    match self {
      None => true,
      Some(thing) => thing.is_empty_value(),
    }
  }
}

// Things with a length or a count
macro_rules! countable {
  ($(impl<$($g:ident),*> $t:ty;)*) => {
    $(
      impl<$($g),*> Emptiness for $t {
        fn is_empty_value(&self) -> bool {
          self.is_empty()
        }
      }
    )*
  };
}

countable! {
  impl<> str;
  impl<> String;
  impl<T> [T];
  impl<T> Vec<T>;
  impl<T> VecDeque<T>;
  impl<T> LinkedList<T>;
  impl<T> BinaryHeap<T>;
  impl<T> BTreeSet<T>;
  impl<K, V> BTreeMap<K, V>;
}

impl<T, const N: usize> Emptiness for [T; N] {
  fn is_empty_value(&self) -> bool {
    N == 0
  }
}

impl Emptiness for CStr {
  fn is_empty_value(&self) -> bool {
    self.to_bytes().is_empty()
  }
}

impl Emptiness for CString {
  fn is_empty_value(&self) -> bool {
    self.as_bytes().is_empty()
  }
}

#[cfg(feature = "std")]
mod std_impls {
  use std::{collections::{HashMap, HashSet}, ffi::{OsStr, OsString}, path::{Path, PathBuf}};
  use super::Emptiness;

  countable! {
    impl<> OsStr;
    impl<> OsString;
    impl<K, V, S> HashMap<K, V, S>;
    impl<T, S> HashSet<T, S>;
  }

  impl Emptiness for Path {
    fn is_empty_value(&self) -> bool {
      self.as_os_str().is_empty()
    }
  }

  impl Emptiness for PathBuf {
    fn is_empty_value(&self) -> bool {
      self.as_os_str().is_empty()
    }
  }
}

// Wrappers answer for whatever they point at
macro_rules! transparent {
  ($($t:ty),*) => {
    $(
      impl<T: Emptiness + ?Sized> Emptiness for $t {
        fn is_empty_value(&self) -> bool {
          (**self).is_empty_value()
        }
      }
    )*
  };
}

transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B: Emptiness + ToOwned + ?Sized> Emptiness for Cow<'_, B> {
  fn is_empty_value(&self) -> bool {
    (**self).is_empty_value()
  }
}

// No length, no count: never empty
macro_rules! never_empty {
  ($($t:ty),*) => {
    $(impl Emptiness for $t {})*
  };
}

never_empty!(
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64, bool, char, ()
);

#[cfg(test)]
mod tests {
  use alloc::{borrow::Cow, boxed::Box, collections::{BTreeMap, VecDeque}, rc::Rc, string::String, sync::Arc, vec, vec::Vec};
  use std::{collections::{HashMap, HashSet}, ffi::CString, path::PathBuf};
  use crate::empty::{is_empty, Emptiness};

  #[test]
  fn absent_is_empty() {
    assert!(is_empty(&None::<String>));
    assert!(is_empty(&None::<Vec<u8>>));
    assert!(is_empty(&None::<u32>));
    assert!(is_empty(&None::<Option<String>>));
  }

  #[test]
  fn present_defers_to_value() {
    assert!(is_empty(&Some(String::new())));
    assert!(!is_empty(&Some(String::from("a"))));
    assert!(!is_empty(&Some(0u32)));
    assert!(is_empty(&Some(None::<&str>)));
  }

  #[test]
  fn text() {
    assert!(is_empty(""));
    assert!(!is_empty("x"));
    assert!(!is_empty(" "));
    assert!(is_empty(&String::new()));
    assert!(!is_empty(&String::from("debut")));
    assert!(is_empty(&Cow::Borrowed("")));
    assert!(!is_empty(&Cow::<str>::Owned(String::from("trax"))));
    assert!(is_empty(&CString::new("").unwrap()));
    assert!(!is_empty(CString::new("c").unwrap().as_c_str()));
    assert!(is_empty(&PathBuf::new()));
    assert!(!is_empty(PathBuf::from("/tmp").as_path()));
  }

  #[test]
  fn collections() {
    assert!(is_empty(&Vec::<u8>::new()));
    assert!(!is_empty(&vec![1]));
    assert!(is_empty(&[0u8; 0]));
    assert!(!is_empty(&[1, 2, 3]));
    assert!(is_empty(&[1, 2, 3][..0]));
    assert!(is_empty(&VecDeque::<u8>::new()));
    assert!(is_empty(&BTreeMap::<u8, u8>::new()));

    let mut map: HashMap<&str, &str> = HashMap::new();
    assert!(is_empty(&map));
    map.insert("k", "v");
    assert!(!is_empty(&map));

    let set: HashSet<u8> = [1].into_iter().collect();
    assert!(!is_empty(&set));
  }

  #[test]
  fn wrappers() {
    assert!(is_empty(&Box::new(String::new())));
    assert!(!is_empty(&Rc::new(vec![1])));
    assert!(is_empty(&Arc::<str>::from("")));
    assert!(!is_empty(&&&"nested"));
  }

  #[test]
  fn scalars_are_never_empty() {
    assert!(!is_empty(&0i32));
    assert!(!is_empty(&0.0f64));
    assert!(!is_empty(&false));
    assert!(!is_empty(&'\0'));
    assert!(!is_empty(&()));
  }

  #[derive(Default)]
  struct Track {
    _bpm: u32,
  }

  impl Emptiness for Track {}

  #[test]
  fn other_types_fall_back_to_not_empty() {
    assert!(!is_empty(&Track { _bpm: 120 }));
    assert!(!is_empty(&Track::default()));
    assert!(!is_empty(&Some(Track::default())));
    assert!(is_empty(&None::<Track>));
    assert!(!is_empty(&vec![Track::default()]));
  }
}
