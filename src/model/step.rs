use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::lenient;

/// One navigation sample of a view.
///
/// Field names follow the wire names of the result document. Everything except the
/// three aggregation metrics (`speed_index`, `load_time`, `fully_loaded`) is carried
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    #[serde(rename = "URL")]
    pub url: String,
    pub run: i64,
    pub step: i64,
    #[serde(rename = "numSteps")]
    pub num_steps: i64,
    #[serde(rename = "eventName")]
    pub event_name: String,
    pub tester: String,
    pub date: f64,
    pub result: i64,
    pub cached: i64,
    #[serde(rename = "testStartOffset")]
    pub test_start_offset: i64,
    pub start_epoch: i64,
    pub test_run_time_ms: i64,

    // Browser and page identity.
    pub browser_name: String,
    pub browser_version: String,
    pub final_url: String,
    #[serde(rename = "document_URL")]
    pub document_url: String,
    pub document_hostname: String,
    pub document_origin: String,
    pub main_frame: String,
    pub base_page_cdn: String,
    pub base_page_cname: String,
    pub base_page_dns_server: String,
    pub base_page_ip_ptr: String,
    pub final_base_page_request: i64,
    pub final_base_page_request_id: String,
    #[serde(rename = "basePageSSLTime")]
    pub base_page_ssl_time: i64,

    // Timings (ms).
    #[serde(rename = "SpeedIndex")]
    pub speed_index: i64,
    #[serde(rename = "loadTime")]
    pub load_time: i64,
    #[serde(rename = "fullyLoaded")]
    pub fully_loaded: i64,
    #[serde(rename = "TTFB")]
    pub ttfb: i64,
    #[serde(rename = "docTime")]
    pub doc_time: i64,
    #[serde(rename = "domTime")]
    pub dom_time: i64,
    #[serde(rename = "titleTime")]
    pub title_time: i64,
    pub render: i64,
    #[serde(rename = "visualComplete")]
    pub visual_complete: i64,
    #[serde(rename = "visualComplete85")]
    pub visual_complete_85: i64,
    #[serde(rename = "visualComplete90")]
    pub visual_complete_90: i64,
    #[serde(rename = "visualComplete95")]
    pub visual_complete_95: i64,
    #[serde(rename = "visualComplete99")]
    pub visual_complete_99: i64,
    #[serde(rename = "lastVisualChange")]
    pub last_visual_change: i64,
    pub aft: i64,
    #[serde(rename = "firstPaint")]
    pub first_paint: f64,
    #[serde(rename = "firstContentfulPaint")]
    pub first_contentful_paint: i64,
    #[serde(rename = "firstMeaningfulPaint")]
    pub first_meaningful_paint: i64,
    #[serde(rename = "firstTextPaint")]
    pub first_text_paint: i64,
    #[serde(rename = "firstImagePaint")]
    pub first_image_paint: i64,
    #[serde(rename = "firstLayout")]
    pub first_layout: i64,
    #[serde(rename = "domLoading")]
    pub dom_loading: i64,
    #[serde(rename = "domInteractive")]
    pub dom_interactive: i64,
    #[serde(rename = "domComplete")]
    pub dom_complete: i64,
    #[serde(rename = "domContentLoadedEventStart")]
    pub dom_content_loaded_event_start: i64,
    #[serde(rename = "domContentLoadedEventEnd")]
    pub dom_content_loaded_event_end: i64,
    #[serde(rename = "loadEventStart")]
    pub load_event_start: i64,
    #[serde(rename = "loadEventEnd")]
    pub load_event_end: i64,
    #[serde(rename = "PerformancePaintTiming.first-paint")]
    pub paint_timing_first_paint: f64,
    #[serde(rename = "PerformancePaintTiming.first-contentful-paint")]
    pub paint_timing_first_contentful_paint: f64,
    #[serde(rename = "chromeUserTiming.firstContentfulPaint")]
    pub chrome_first_contentful_paint: i64,
    #[serde(rename = "chromeUserTiming.firstMeaningfulPaint")]
    pub chrome_first_meaningful_paint: i64,
    #[serde(rename = "chromeUserTiming.domInteractive")]
    pub chrome_dom_interactive: i64,
    #[serde(rename = "chromeUserTiming.domComplete")]
    pub chrome_dom_complete: i64,
    #[serde(rename = "chromeUserTiming.loadEventEnd")]
    pub chrome_load_event_end: i64,
    #[serde(rename = "TTIMeasurementEnd")]
    pub time_to_interactive: i64,
    #[serde(rename = "LastInteractive")]
    pub last_interactive: i64,
    pub server_rtt: i64,

    // CPU.
    #[serde(rename = "fullyLoadedCPUms")]
    pub fully_loaded_cpu_ms: f64,
    #[serde(rename = "fullyLoadedCPUpct")]
    pub fully_loaded_cpu_pct: f64,
    #[serde(rename = "docCPUms")]
    pub doc_cpu_ms: f64,
    #[serde(rename = "docCPUpct")]
    pub doc_cpu_pct: f64,

    // Byte and request counters.
    #[serde(rename = "bytesIn")]
    pub bytes_in: i64,
    #[serde(rename = "bytesOut")]
    pub bytes_out: i64,
    #[serde(rename = "bytesInDoc")]
    pub bytes_in_doc: i64,
    #[serde(rename = "bytesOutDoc")]
    pub bytes_out_doc: i64,
    #[serde(rename = "effectiveBps")]
    pub effective_bps: i64,
    #[serde(rename = "effectiveBpsDoc")]
    pub effective_bps_doc: i64,
    pub certificate_bytes: i64,
    pub connections: i64,
    pub requests: i64,
    #[serde(rename = "requestsFull")]
    pub requests_full: i64,
    #[serde(rename = "requestsDoc")]
    pub requests_doc: i64,
    pub responses_200: i64,
    pub responses_404: i64,
    pub responses_other: i64,
    pub server_count: i64,
    #[serde(rename = "domElements")]
    pub dom_elements: i64,
    #[serde(rename = "smallImageCount")]
    pub small_image_count: i64,
    #[serde(rename = "bigImageCount")]
    pub big_image_count: i64,
    #[serde(rename = "maybeCaptcha")]
    pub maybe_captcha: i64,

    // Optimization scores, -1 when not checked.
    pub optimization_checked: i64,
    pub score_cache: i64,
    pub score_cdn: i64,
    pub score_gzip: i64,
    pub score_cookies: i64,
    #[serde(rename = "score_keep-alive")]
    pub score_keep_alive: i64,
    pub score_minify: i64,
    pub score_combine: i64,
    pub score_compress: i64,
    pub score_etags: i64,
    pub score_progressive_jpeg: i64,
    pub gzip_total: i64,
    pub gzip_savings: i64,
    pub minify_total: i64,
    pub minify_savings: i64,
    pub image_total: i64,
    pub image_savings: i64,

    // Client environment.
    #[serde(rename = "Colordepth")]
    pub color_depth: i64,
    #[serde(rename = "Resolution")]
    pub resolution: String,
    #[serde(rename = "Dpi")]
    pub dpi: String,
    #[serde(rename = "Images")]
    pub images_summary: String,
    pub custom: Vec<String>,

    #[serde(deserialize_with = "lenient::map_or_seq")]
    pub detected: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient::map_or_seq")]
    pub detected_apps: BTreeMap<String, String>,
    #[serde(rename = "userTimes", deserialize_with = "lenient::map_or_seq")]
    pub user_times: BTreeMap<String, f64>,
    #[serde(rename = "userTimingMeasures")]
    pub user_timing_measures: Vec<UserTimingMeasure>,
    #[serde(rename = "chromeUserTiming")]
    pub chrome_user_timing: Vec<ChromeUserTiming>,
    #[serde(rename = "blinkFeatureFirstUsed")]
    pub blink_feature_first_used: BlinkFeatures,

    pub pages: Pages,
    pub thumbnails: Thumbnails,
    pub images: Images,
    #[serde(rename = "rawData")]
    pub raw_data: RawData,
    #[serde(deserialize_with = "lenient::map_or_seq")]
    pub domains: BTreeMap<String, DomainStats>,
    #[serde(deserialize_with = "lenient::map_or_seq")]
    pub breakdown: BTreeMap<String, ContentBreakdown>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTimingMeasure {
    pub name: String,
    #[serde(rename = "startTime")]
    pub start_time: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeUserTiming {
    pub name: String,
    pub time: i64,
}

/// First-use timestamps of browser features, keyed by Blink feature name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkFeatures {
    #[serde(rename = "AnimatedCSSFeatures")]
    pub animated_css_features: serde_json::Value,
    #[serde(rename = "CSSFeatures", deserialize_with = "lenient::map_or_seq")]
    pub css_features: BTreeMap<String, f64>,
    #[serde(rename = "Features", deserialize_with = "lenient::map_or_seq")]
    pub features: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pages {
    pub details: String,
    pub checklist: String,
    pub breakdown: String,
    pub domains: String,
    #[serde(rename = "screenShot")]
    pub screen_shot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub waterfall: String,
    pub checklist: String,
    #[serde(rename = "screenShot")]
    pub screen_shot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    pub waterfall: String,
    #[serde(rename = "connectionView")]
    pub connection_view: String,
    pub checklist: String,
    #[serde(rename = "screenShot")]
    pub screen_shot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawData {
    pub headers: String,
    #[serde(rename = "pageData")]
    pub page_data: String,
    #[serde(rename = "requestsData")]
    pub requests_data: String,
    pub utilization: String,
    pub trace: String,
}

/// Requests served by one host during the step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainStats {
    pub bytes: i64,
    pub requests: i64,
    pub connections: i64,
    pub cdn_provider: String,
}

/// Requests of one content type (`html`, `js`, `css`, ...) during the step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentBreakdown {
    pub color: Vec<i64>,
    pub bytes: i64,
    #[serde(rename = "bytesUncompressed")]
    pub bytes_uncompressed: i64,
    pub requests: i64,
}
