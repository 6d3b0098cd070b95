use leptos::*;

/// Live camera barcode scanner. Opens the rear camera and polls the browser
/// `BarcodeDetector` API; the first decoded value is reported through
/// `on_decode`, after which the camera is released. The caller is expected to
/// unmount the component once a value arrives.
#[component]
pub fn BarcodeScanner(#[prop(into)] on_decode: Callback<String>) -> impl IntoView {
    let video_ref = create_node_ref::<html::Video>();

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::Cell;
        use std::rc::Rc;
        use wasm_bindgen_futures::spawn_local;

        let cancelled = Rc::new(Cell::new(false));
        let started = Rc::new(Cell::new(false));

        {
            let cancelled = cancelled.clone();
            create_effect(move |_| {
                let Some(video) = video_ref.get() else {
                    return;
                };
                if started.replace(true) {
                    return;
                }
                let cancelled = cancelled.clone();
                spawn_local(async move {
                    if let Err(err) = imp::run_scanner(&video, cancelled, on_decode).await {
                        logging::error!("barcode scanner unavailable: {err:?}");
                    }
                });
            });
        }

        on_cleanup(move || cancelled.set(true));
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_decode;

    view! {
        <div style="width: 100%; max-width: 420px; padding: 1rem; background: var(--bg-subtle); border-radius: var(--radius-md);">
            <video
                node_ref=video_ref
                autoplay=true
                playsinline="true"
                style="width: 100%; border-radius: var(--radius-md);"
            ></video>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::Callback;
    use leptos::Callable;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    const SCAN_INTERVAL_MS: u32 = 300;

    // `BarcodeDetector` is not exposed by web-sys on stable, so bind it by hand.
    #[wasm_bindgen]
    extern "C" {
        type BarcodeDetector;

        #[wasm_bindgen(constructor, catch)]
        fn new() -> Result<BarcodeDetector, JsValue>;

        #[wasm_bindgen(method)]
        fn detect(this: &BarcodeDetector, source: &web_sys::HtmlVideoElement) -> js_sys::Promise;
    }

    pub async fn run_scanner(
        video: &web_sys::HtmlVideoElement,
        cancelled: Rc<Cell<bool>>,
        on_decode: Callback<String>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;

        let constraints = web_sys::MediaStreamConstraints::new();
        let video_constraints = js_sys::Object::new();
        js_sys::Reflect::set(&video_constraints, &"facingMode".into(), &"environment".into())?;
        constraints.set_video(&video_constraints.into());

        let stream: web_sys::MediaStream =
            JsFuture::from(devices.get_user_media_with_constraints(&constraints)?)
                .await?
                .dyn_into()?;
        video.set_src_object(Some(&stream));
        let _ = JsFuture::from(video.play()?).await;

        let detector = BarcodeDetector::new()?;
        while !cancelled.get() {
            gloo_timers::future::TimeoutFuture::new(SCAN_INTERVAL_MS).await;
            let Ok(detected) = JsFuture::from(detector.detect(video)).await else {
                continue;
            };
            let codes = js_sys::Array::from(&detected);
            if codes.length() == 0 {
                continue;
            }
            let raw = js_sys::Reflect::get(&codes.get(0), &"rawValue".into())?;
            if let Some(text) = raw.as_string() {
                on_decode.call(text);
                break;
            }
        }

        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
        Ok(())
    }
}
