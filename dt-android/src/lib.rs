use std::{cmp::Ordering, fmt::Display};
use jni::{
    errors::Result as JniResult,
    objects::{JClass, JObject, JString},
    sys::{jboolean, jdouble, jdoubleArray, jint, JNI_FALSE, JNI_TRUE},
    JNIEnv,
};
use foundation::{float, is_empty, version, StaticSystem, SystemInfo};
use ui::{is_retina, FixedScreen, Rgba};

// Kotlin side: `object Rust` in package com.debuttrax, with a bindings object
// exposing `systemVersion(): String` and `scale(): Double`.

fn jbool(b: bool) -> jboolean {
  if b { JNI_TRUE } else { JNI_FALSE }
}

// A failed throw leaves the VM with nothing pending, so the fallback would be
// returned silently. Abort instead.
fn recover<T, E: Display, F: Display>(res: Result<T, E>, fallback: T, throw: impl FnOnce(String) -> Result<(), F>) -> T {
  match res {
    Ok(v) => v,
    Err(e) => {
      let msg = e.to_string();
      if let Err(t) = throw(msg.clone()) {
        panic!("could not throw {:?}: {}", msg, t);
      }
      fallback
    }
  }
}

// JNI failures surface as a Java exception, the return value is then ignored by the VM
fn or_throw<T>(env: &JNIEnv, res: JniResult<T>, fallback: T) -> T {
  recover(res, fallback, |msg| env.throw_new("java/lang/IllegalStateException", msg))
}

fn system<'a>(env: &JNIEnv<'a>, bindings: JObject<'a>) -> JniResult<StaticSystem<String>> {
  let version = env.call_method(bindings, "systemVersion", "()Ljava/lang/String;", &[])?.l()?;
  let version: String = env.get_string(JString::from(version))?.into();
  Ok(StaticSystem(version))
}

fn screen<'a>(env: &JNIEnv<'a>, bindings: JObject<'a>) -> JniResult<FixedScreen> {
  let scale = env.call_method(bindings, "scale", "()D", &[])?.d()?;
  Ok(FixedScreen::new(scale))
}

fn rust_string<'a>(env: &JNIEnv<'a>, s: JString<'a>) -> JniResult<Option<String>> {
  if s.is_null() {
    return Ok(None);
  }
  Ok(Some(env.get_string(s)?.into()))
}

fn double_array(env: &JNIEnv, color: Rgba) -> JniResult<jdoubleArray> {
  let array = env.new_double_array(4)?;
  env.set_double_array_region(array, 0, &[color.red, color.green, color.blue, color.alpha])?;
  Ok(array)
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_isEmpty<'a>(env: JNIEnv<'a>, _: JClass<'a>, s: JString<'a>) -> jboolean {
  let res = rust_string(&env, s).map(|s| jbool(is_empty(&s)));
  or_throw(&env, res, JNI_FALSE)
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_nearlyEqual(_: JNIEnv, _: JClass, a: jdouble, b: jdouble) -> jboolean {
  jbool(float::nearly_equal(a, b))
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_nearlyZero(_: JNIEnv, _: JClass, a: jdouble) -> jboolean {
  jbool(float::nearly_zero(a))
}

/// -1, 0 or 1, like `Comparable.compareTo`.
#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_compareVersions<'a>(env: JNIEnv<'a>, _: JClass<'a>, a: JString<'a>, b: JString<'a>) -> jint {
  let res = (|| -> JniResult<jint> {
    let a: String = env.get_string(a)?.into();
    let b: String = env.get_string(b)?.into();
    Ok(match version::compare(&a, &b) {
      Ordering::Less => -1,
      Ordering::Equal => 0,
      Ordering::Greater => 1,
    })
  })();
  or_throw(&env, res, 0)
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_systemVersionAtLeast<'a>(env: JNIEnv<'a>, _: JClass<'a>, bindings: JObject<'a>, v: JString<'a>) -> jboolean {
  let res = (|| -> JniResult<jboolean> {
    let platform = system(&env, bindings)?;
    let v: String = env.get_string(v)?.into();
    Ok(jbool(platform.system_version_greater_than_or_equal_to(&v)))
  })();
  or_throw(&env, res, JNI_FALSE)
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_isRetina<'a>(env: JNIEnv<'a>, _: JClass<'a>, bindings: JObject<'a>) -> jboolean {
  let res = screen(&env, bindings).map(|s| jbool(is_retina(&s)));
  or_throw(&env, res, JNI_FALSE)
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_colorFromRgb(env: JNIEnv, _: JClass, hex: jint) -> jdoubleArray {
  let res = double_array(&env, Rgba::from_rgb(hex as u32));
  or_throw(&env, res, std::ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn Java_com_debuttrax_Rust_colorFromRgba(env: JNIEnv, _: JClass, hex: jint) -> jdoubleArray {
  let res = double_array(&env, Rgba::from_rgba(hex as u32));
  or_throw(&env, res, std::ptr::null_mut())
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use crate::recover;

  #[test]
  fn ok_passes_through() {
    let thrown = RefCell::new(Vec::new());
    let v = recover(Ok::<_, String>(7), 0, |msg| {
      thrown.borrow_mut().push(msg);
      Ok::<(), String>(())
    });
    assert_eq!(v, 7);
    assert!(thrown.borrow().is_empty());
  }

  #[test]
  fn err_throws_and_falls_back() {
    let thrown = RefCell::new(Vec::new());
    let v = recover(Err::<i32, _>("no such method"), -1, |msg| {
      thrown.borrow_mut().push(msg);
      Ok::<(), String>(())
    });
    assert_eq!(v, -1);
    assert_eq!(*thrown.borrow(), ["no such method"]);
  }

  #[test]
  #[should_panic(expected = "could not throw")]
  fn failed_throw_aborts() {
    recover(Err::<i32, _>("no such method"), -1, |_| Err("class not found"));
  }
}
