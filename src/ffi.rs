//! C ABI for tire-kit
//!
//! Value types cross the boundary by value (`Tire`, `Size` and `Material` are
//! `#[repr(C)]`). Formatted strings are heap-allocated and must be released
//! with [`tire_kit_string_free`].

use std::ffi::CString;
use std::ffi::c_char;
use std::ptr;

use crate::model::Material;
use crate::model::Tire;

/// View a caller-provided buffer as a slice; null is an empty sequence.
///
/// # Safety
///
/// If `ids` is non-null it must point to `len` readable `i64` values.
unsafe fn ids_from_raw<'a>(ids: *const i64, len: usize) -> &'a [i64] {
    if ids.is_null() || len == 0 {
        return &[];
    }
    std::slice::from_raw_parts(ids, len)
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn create_random_tire() -> Tire {
    crate::generator::create_random_tire()
}

#[no_mangle]
pub extern "C" fn wheel_size_aspect(height: f64, width: f64) -> f64 {
    crate::model::wheel_size_aspect(height, width)
}

#[no_mangle]
pub extern "C" fn func_with_no_return() {
    crate::func_with_no_return();
}

/// Static, NUL-terminated name of `material`
#[no_mangle]
pub extern "C" fn material_name(material: Material) -> *const c_char {
    let name: &'static std::ffi::CStr = match material {
        Material::Plastic => c"Plastic",
        Material::Rubber => c"Rubber",
        Material::SyntheticRubber => c"SyntheticRubber",
        Material::Polyurethane => c"Polyurethane",
        Material::Foam => c"Foam",
    };
    name.as_ptr()
}

/// # Safety
///
/// `ids` must be null or point to `len` readable `i64` values. The returned
/// string must be released with [`tire_kit_string_free`].
#[no_mangle]
pub unsafe extern "C" fn format_wheel_identifier_c(ids: *const i64, len: usize) -> *mut c_char {
    let ids = ids_from_raw(ids, len);
    into_c_string(crate::format::format_wheel_identifier(ids))
}

/// # Safety
///
/// `ids` must be null or point to `len` readable `i64` values. The returned
/// string must be released with [`tire_kit_string_free`].
#[no_mangle]
pub unsafe extern "C" fn format_size_of_wheels_c(ids: *const i64, len: usize) -> *mut c_char {
    let ids = ids_from_raw(ids, len);
    into_c_string(crate::format::format_size_of_wheels(ids))
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from this library that has not been
/// freed yet.
#[no_mangle]
pub unsafe extern "C" fn tire_kit_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(CString::from_raw(s));
}
