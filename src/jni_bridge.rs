//! JNI Bridge - Kotlin bindings for the native core
//!
//! Exports for `object com.example.edgedetectionapp.NativeProcessor`.
//! Kotlin `object` members are instance methods, so every export receives the
//! singleton as a `JObject` rather than a `JClass`.
//! All functions follow the JNI naming convention: Java_<package>_<class>_<method>

use jni::objects::JObject;
use jni::sys::jstring;
use jni::JNIEnv;

use crate::error::Result;
use crate::version::{query_version_info, VersionSource};

#[cfg(feature = "opencv")]
use crate::version::{query_build_information, query_version, OpenCvVersion};

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Copy `result` into a new Java string owned by the caller.
///
/// On error a `RuntimeException` carrying the error text is thrown and `null`
/// is returned.
fn to_java_string(env: &mut JNIEnv, result: Result<String>) -> jstring {
    let converted = result.and_then(|s| Ok(env.new_string(s)?.into_raw()));

    match converted {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Native call failed: {}", e);
            // a failed allocation leaves its own exception pending
            if !env.exception_check().unwrap_or(false) {
                if let Err(throw_err) = env.throw_new(RUNTIME_EXCEPTION, e.to_string()) {
                    log::error!("Failed to throw {}: {}", RUNTIME_EXCEPTION, throw_err);
                }
            }
            JObject::null().into_raw()
        }
    }
}

/// Serialize the parsed version of `source` to JSON
#[cfg_attr(not(feature = "opencv"), allow(dead_code))]
pub(crate) fn version_info_json<S: VersionSource + ?Sized>(source: &S) -> Result<String> {
    let info = query_version_info(source)?;
    Ok(serde_json::to_string(&info)?)
}

/// Initialize the native core
/// JNI: NativeProcessor.init()
#[no_mangle]
pub extern "system" fn Java_com_example_edgedetectionapp_NativeProcessor_init<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    crate::init_library();
}

/// Get this library's version
/// JNI: NativeProcessor.getLibraryVersion(): String
#[no_mangle]
pub extern "system" fn Java_com_example_edgedetectionapp_NativeProcessor_getLibraryVersion<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    to_java_string(&mut env, Ok(crate::VERSION.to_string()))
}

/// Get the linked OpenCV version string
/// JNI: NativeProcessor.testOpenCV(): String
#[cfg(feature = "opencv")]
#[no_mangle]
pub extern "system" fn Java_com_example_edgedetectionapp_NativeProcessor_testOpenCV<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    crate::init_library();
    let result = query_version(&OpenCvVersion);
    to_java_string(&mut env, result)
}

/// Get the linked OpenCV version, parsed
/// JNI: NativeProcessor.getVersionInfo(): String (JSON VersionInfo)
#[cfg(feature = "opencv")]
#[no_mangle]
pub extern "system" fn Java_com_example_edgedetectionapp_NativeProcessor_getVersionInfo<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    crate::init_library();
    let result = version_info_json(&OpenCvVersion);
    to_java_string(&mut env, result)
}

/// Get the OpenCV build summary
/// JNI: NativeProcessor.getBuildInformation(): String
#[cfg(feature = "opencv")]
#[no_mangle]
pub extern "system" fn Java_com_example_edgedetectionapp_NativeProcessor_getBuildInformation<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    crate::init_library();
    let result = query_build_information(&OpenCvVersion);
    to_java_string(&mut env, result)
}
